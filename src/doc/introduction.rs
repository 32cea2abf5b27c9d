/*!
# Introductory Tutorial for Pixel Wall-E

Wall-E is a small robot standing on a square canvas of white cells.
You tell it where to stand, which paint to load and how wide a brush to use,
then send it walking. Everything it walks over gets painted.

Programs are plain text files with one instruction per line. Run one with
the `walle` command. The canvas is printed when the program ends.

```text
walle square.pw --size 16
```

Add `--plain` to print letters instead of colored blocks. Stop a program
that never ends with CTRL-C; the canvas is still printed as far as it got.

Every program starts by putting the robot on the canvas. Coordinates start
at zero in the top left corner. `x` grows to the right and `y` grows down.

```text
Spawn(2, 2)
```

The brush starts out `Transparent`, so nothing is painted yet. Load some
paint and draw a line three cells to the right.

```text
Spawn(2, 2)
Color("Red")
DrawLine(1, 0, 3)
```

The robot paints cells (2, 2) through (5, 2) and stops on (5, 2).
The first two numbers of `DrawLine` are a direction, each one of `-1`, `0`
or `1`. The last is how far to go.

Variables hold numbers and text. Labels mark a line so `GoTo` can jump
there when a condition holds. Together they make loops.

```text
Spawn(0, 0)
Color("Blue")
n <- 0
step:
DrawLine(1, 1, 1)
n <- n + 1
GoTo [step] (n < 5)
```

When something goes wrong the program stops and the line is reported.

```text
OUT OF CANVAS IN 3; (10, 2)
```

*/
