use super::{Canvas, Color};

type Point = (i32, i32);

/// Paints a `size`×`size` square centered on `(x, y)`, clipped to the canvas.
pub fn stamp(canvas: &mut Canvas, (x, y): Point, color: Color, size: i32) {
    square(canvas, i64::from(x), i64::from(y), i64::from(size / 2), color);
}

/// Only the part of the square that overlaps the canvas is visited.
/// Returns whether the square covered the whole canvas.
fn square(canvas: &mut Canvas, x: i64, y: i64, half: i64, color: Color) -> bool {
    let last = canvas.size() as i64 - 1;
    let (left, right) = ((x - half).max(0), (x + half).min(last));
    let (top, bottom) = ((y - half).max(0), (y + half).min(last));
    for j in top..=bottom {
        for i in left..=right {
            canvas.set(i as i32, j as i32, color);
        }
    }
    x - half <= 0 && y - half <= 0 && x + half >= last && y + half >= last
}

/// Integer Bresenham, both endpoints included.
pub fn line_points((x0, y0): Point, (x1, y1): Point) -> Vec<Point> {
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;
    let (mut x, mut y) = (x0, y0);
    let mut points = vec![];
    loop {
        points.push((x, y));
        if x == x1 && y == y1 {
            return points;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

pub fn line(canvas: &mut Canvas, from: Point, to: Point, color: Color, size: i32) {
    let half = i64::from(size / 2);
    for (x, y) in line_points(from, to) {
        if square(canvas, i64::from(x), i64::from(y), half, color) {
            return;
        }
    }
}

/// Midpoint circle outline, each step stamping all eight octant reflections.
///
/// Points whose stamp cannot reach the canvas are skipped and the walk
/// stops once no later point can reach it, so the work is bounded by the
/// canvas and brush rather than by the radius.
pub fn circle(canvas: &mut Canvas, (cx, cy): Point, radius: i32, color: Color, size: i32) {
    let half = i64::from(size / 2);
    let reach = canvas.size() as i64 - 1 + half;
    let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
    // Every outline point is at least r / 2 from the center along one axis.
    if r / 2 > reach {
        return;
    }
    let (mut x, mut y) = (0, r);
    let mut d = 3 - 2 * r;
    loop {
        if x <= reach && y <= reach {
            let octants = [
                (cx + x, cy + y),
                (cx - x, cy + y),
                (cx + x, cy - y),
                (cx - x, cy - y),
                (cx + y, cy + x),
                (cx - y, cy + x),
                (cx + y, cy - x),
                (cx - y, cy - x),
            ];
            for &(px, py) in octants.iter() {
                if square(canvas, px, py, half, color) {
                    return;
                }
            }
        }
        if y < x || x > reach {
            return;
        }
        x += 1;
        if d > 0 {
            y -= 1;
            d += 4 * (x - y) + 10;
        } else {
            d += 4 * x + 6;
        }
    }
}

/// Four-connected fill using an explicit stack. Returns the cells painted.
pub fn flood_fill(canvas: &mut Canvas, (x, y): Point, replacement: Color) -> usize {
    let target = match canvas.get(x, y) {
        Some(target) if target != replacement => target,
        _ => return 0,
    };
    let mut painted = 0;
    let mut stack = vec![(x, y)];
    while let Some((x, y)) = stack.pop() {
        match canvas.get(x, y) {
            Some(color) if color == target && color != replacement => {}
            _ => continue,
        }
        canvas.set(x, y, replacement);
        painted += 1;
        stack.push((x + 1, y));
        stack.push((x - 1, y));
        stack.push((x, y + 1));
        stack.push((x, y - 1));
    }
    painted
}
