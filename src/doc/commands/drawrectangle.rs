/*!
# `DrawRectangle(dirX, dirY, distance, width, height)`

## Purpose
Moves the robot `distance` cells in a direction and paints the outline of
a rectangle centered on the new position.

## Remarks
The whole rectangle must fit on the canvas or an `OUT OF CANVAS` error
occurs before anything is painted.

## Example
```text
Spawn(5, 5)
Color("Blue")
DrawRectangle(0, 0, 0, 3, 3)
```

*/
