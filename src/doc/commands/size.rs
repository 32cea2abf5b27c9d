/*!
# `Size(k)`

## Purpose
Sets the brush width.

## Remarks
Each painted point becomes a square of `k` by `k` cells centered on the
point. Even widths are reduced by one. A width below one is an error.

## Example
```text
Size(4)
```
The brush is now three cells wide.

*/
