/*!
# Expressions and Variables

Pixel Wall-E has three kinds of values: integers, reals and strings.
Variable names start with a letter followed by letters, digits or
underbars (_). Names are case sensitive so `n` and `N` are different
variables.

A variable comes into being the first time it is assigned. Reading a
variable that was never assigned stops the program with an
`UNDEFINED VARIABLE` error.

```text
size <- 3
half <- size / 2
name <- "Red"
```

Literals are integers like `42`, reals like `1.5` or `.25`, strings in
double quotes, and the words `true` and `false` which mean `1` and `0`.

## Operators

From loosest to tightest binding.

```text
||                     Or
&&                     And
==  !=  <  >  <=  >=   Comparison
+  -                   Addition and subtraction
*  /  %                Multiplication, division and remainder
**                     Power
```

Operators of the same level group from the left, so `10 - 3 - 2` is `5`
and `2 ** 3 ** 2` is `64`. Parentheses group anything.

Arithmetic always produces a real. Commands that need whole numbers round
to the nearest integer. A result too large for an integer is an `OVERFLOW`.
Dividing or taking the remainder by zero is a `DIVISION BY ZERO`.

Comparisons and logic produce `1` for true and `0` for false. Zero and the
empty string are false, everything else is true.

Strings can be compared with `==` and `!=` only. They compare by their text,
so `"5" == 5` is true. Using a string anywhere else a number is needed is a
`TYPE MISMATCH`.

```text
flag <- GetActualX() > 3 && IsBrushColor("Red")
```

*/
