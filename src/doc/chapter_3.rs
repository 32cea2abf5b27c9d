/*!
# Functions

Function names are not case sensitive. Colors are passed as quoted names.
*/

pub mod GetActualX {
    /*!
    ## `GetActualX()` Returns the robot's column.
    */
}

pub mod GetActualY {
    /*!
    ## `GetActualY()` Returns the robot's row.
    */
}

pub mod GetCanvasSize {
    /*!
    ## `GetCanvasSize()` Returns the number of cells along one side of the canvas.
    */
}

pub mod GetColorCount {
    /*!
    ## `GetColorCount(color, x1, y1, x2, y2)` Counts cells of a color.
    The rectangle spanned by the two corners is clipped to the canvas.
    The corners may be given in any order.
    ```text
    reds <- GetColorCount("Red", 0, 0, GetCanvasSize() - 1, GetCanvasSize() - 1)
    ```
    */
}

pub mod IsBrushColor {
    /*!
    ## `IsBrushColor(color)` Returns 1 if the brush holds this color, otherwise 0.
    */
}

pub mod IsBrushSize {
    /*!
    ## `IsBrushSize(size)` Returns 1 if the brush is this wide, otherwise 0.
    */
}

pub mod IsCanvasColor {
    /*!
    ## `IsCanvasColor(color, vertical, horizontal)` Tests a cell near the robot.
    Returns 1 if the cell `horizontal` columns right and `vertical` rows down
    from the robot has this color. Cells off the canvas return 0.
    ```text
    GoTo [wall] (IsCanvasColor("Black", 0, 1))
    ```
    */
}
