/*!
# Commands

Each line holds one command, one assignment, one jump or one label.
Blank lines are ignored. Command names are not case sensitive.

Every command except `Spawn` requires the robot to be on the canvas.
Assignments and jumps may come before `Spawn`. A program that ends
without ever calling `Spawn` fails with `MISSING SPAWN`.

Parameters written as plain numbers are checked before the line runs.
Parameters written as expressions are checked when they are evaluated.

*/

#[path = "commands/spawn.rs"]
#[allow(non_snake_case)]
pub mod Spawn;

#[path = "commands/color.rs"]
#[allow(non_snake_case)]
pub mod Color;

#[path = "commands/size.rs"]
#[allow(non_snake_case)]
pub mod Size;

#[path = "commands/drawline.rs"]
#[allow(non_snake_case)]
pub mod DrawLine;

#[path = "commands/drawcircle.rs"]
#[allow(non_snake_case)]
pub mod DrawCircle;

#[path = "commands/drawrectangle.rs"]
#[allow(non_snake_case)]
pub mod DrawRectangle;

#[path = "commands/fill.rs"]
#[allow(non_snake_case)]
pub mod Fill;

#[path = "commands/goto.rs"]
#[allow(non_snake_case)]
pub mod GoTo;

#[path = "commands/assign.rs"]
#[allow(non_snake_case)]
pub mod Assignment;
