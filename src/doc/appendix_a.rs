/*!
# Error Messages

An error stops the program. The message names the line, counting the
first line of the file as 1, and often adds detail after a semicolon.

```text
NOT SPAWNED IN 2; Color BEFORE SPAWN
```

Syntax errors are found when a line is read:

* `SYNTAX ERROR` Malformed line, parameter list or expression, wrong
  number of parameters, or a duplicate label.
* `INVALID LABEL` A label name with characters that are not allowed.
* `UNKNOWN COMMAND` The name before the parameters is not a command.

Runtime errors are found while a line runs:

* `ILLEGAL FUNCTION CALL` Wrong number of arguments to a function, or a
  direction, size, distance or radius out of range.
* `OVERFLOW` A number too large to use as a coordinate or size.
* `UNDEFINED LABEL` `GoTo` names a label that doesn't exist.
* `UNDEFINED VARIABLE` A variable is read before it is assigned.
* `DIVISION BY ZERO` Dividing or taking a remainder by zero.
* `TYPE MISMATCH` A string was used where a number is needed, or compared
  with `<`, `>`, `<=` or `>=`.
* `UNDEFINED FUNCTION` The function doesn't exist.
* `NOT SPAWNED` A command ran before `Spawn`.
* `ALREADY SPAWNED` `Spawn` ran a second time.
* `MISSING SPAWN` The program ended without calling `Spawn`.
* `OUT OF CANVAS` A position or shape falls off the canvas.
* `INVALID COLOR` A color name that is not in the palette.
* `BREAK` The program was stopped with CTRL-C.

*/
