/*!
# `Fill`

## Purpose
Paints the area the robot stands in.

## Remarks
Starting at the robot, every cell reachable through up, down, left and
right moves that has the same color as the starting cell is painted with
the brush color. Nothing happens if the brush is `Transparent` or already
the color of the starting cell.

## Example
```text
Spawn(0, 0)
Color("Yellow")
Fill
```

*/
