/*!
# `GoTo [label] (condition)`

## Purpose
Continues at a label when the condition is true.

## Remarks
A label is a line with a name followed by a colon. Names may use letters,
digits, hyphens and underbars but must not start with a digit or underbar.
Labels are not case sensitive. Defining the same label twice is an error.

The condition may be left out, which always jumps. If the label doesn't
exist an `UNDEFINED LABEL` error occurs even when the condition is false.

## Example
```text
Spawn(0, 0)
GoTo [End] (1 == 1)
Color("Red")
End:
```
The brush is still `Transparent` at the end.

*/
