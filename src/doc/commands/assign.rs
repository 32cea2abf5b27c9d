/*!
# `name <- expression`

## Purpose
Evaluates the expression and stores it in a variable.

## Example
```text
x <- GetActualX() + 1
```

*/
