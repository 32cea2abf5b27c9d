/*!
# `DrawCircle(dirX, dirY, radius)`

## Purpose
Moves the robot `radius` cells in a direction and paints a circle around
the new position.

## Remarks
The circle outline may run off the canvas; only the cells inside are
painted. The center must be on the canvas.

## Example
```text
Spawn(10, 10)
Color("Green")
DrawCircle(0, 0, 5)
```

*/
