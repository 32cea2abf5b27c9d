/*!
# `Color("name")`

## Purpose
Loads the brush with a color.

## Remarks
The name must be a quoted string naming one of `Red`, `Blue`, `Green`,
`Yellow`, `Orange`, `Purple`, `Black`, `White` or `Transparent`. Case does
not matter. Any other name is an `INVALID COLOR` error.

A `Transparent` brush paints nothing and drawing commands leave the
robot where it stands.

## Example
```text
Color("orange")
```

*/
