use raster_lines::{find_lines, Bitmap, Point};

fn main() {
    // Demo stub: draws a few synthetic strokes and prints the extracted lines
    env_logger::init();

    let mut grid = Bitmap::new(32, 24);
    for x in 2..=29 {
        grid.plot(Point::new(x, 3));
    }
    for i in 0..=15 {
        grid.plot(Point::new(4 + i, 6 + i));
        grid.plot(Point::new(27 - i, 6 + i));
    }

    match find_lines(&grid) {
        Ok(lines) => {
            println!("found={}", lines.len());
            for line in lines {
                println!("{line}");
            }
        }
        Err(err) => eprintln!("Error: {err}"),
    }
}
