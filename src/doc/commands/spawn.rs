/*!
# `Spawn(x, y)`

## Purpose
Places the robot on the canvas at column `x`, row `y`.

## Remarks
Must run before any other command and only once per program. A second
`Spawn` is an `ALREADY SPAWNED` error. A position outside the canvas is
an `OUT OF CANVAS` error.

## Example
```text
Spawn(0, 0)
```

*/
