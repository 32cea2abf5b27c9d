/*!
# `DrawLine(dirX, dirY, distance)`

## Purpose
Paints a straight line from the robot and moves the robot to its end.

## Remarks
`dirX` and `dirY` must each be `-1`, `0` or `1`. The end point is the
robot's position plus the direction times `distance`. Both ends are painted.
If the end point is off the canvas nothing is painted and an
`OUT OF CANVAS` error occurs.

## Example
```text
Spawn(2, 2)
Color("Red")
DrawLine(1, 0, 3)
```

*/
