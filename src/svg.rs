use svg::Document;
use svg::Node;
use svg::node::Text as TextNode;
use svg::node::element::path::Data;
use svg::node::element::{Element, Path};

use crate::SetMinMax;
use crate::grid::Grid;
use crate::pipes::Cell;

const CELL: f64 = 40.0;

/// Renders a grid as an SVG document. Pipe cells draw one arm per opening
/// from the cell center; the source and sinks draw as labelled circles.
pub fn render(grid: &Grid) -> String {
    let mut min_x = 0;
    let mut max_x = 0;
    let mut min_y = 0;
    let mut max_y = 0;
    let mut first = true;
    for (x, y, _) in grid.cells() {
        if first {
            (min_x, max_x, min_y, max_y) = (x, x, y, y);
            first = false;
            continue;
        }
        min_x.setmin(x);
        max_x.setmax(x);
        min_y.setmin(y);
        max_y.setmax(y);
    }

    let width = (max_x - min_x + 1) as f64 * CELL;
    let height = (max_y - min_y + 1) as f64 * CELL;

    // Cell centers; rows are flipped so that larger y draws higher up.
    let center = |x: i64, y: i64| {
        (
            (x - min_x) as f64 * CELL + CELL / 2.0,
            (max_y - y) as f64 * CELL + CELL / 2.0,
        )
    };

    let mut document = Document::new()
        .set("width", width + 20.0)
        .set("height", height + 20.0)
        .set("viewBox", (-10.0, -10.0, width + 10.0, height + 10.0));

    // Pipe arms first so that terminal circles draw on top of them.
    for (x, y, cell) in grid.cells() {
        let Cell::Pipe(shape) = cell else { continue };
        let (cx, cy) = center(x, y);
        let mut data = Data::new();
        for &(dx, dy) in shape.openings() {
            data = data.move_to((cx, cy)).line_to((
                cx + dx as f64 * CELL / 2.0,
                cy - dy as f64 * CELL / 2.0,
            ));
        }
        let path = Path::new()
            .set("fill", "none")
            .set("stroke", "black")
            .set("stroke-width", 6)
            .set("stroke-linecap", "round")
            .set("d", data)
            .set("title", format!("{} ({}, {})", shape.symbol(), x, y));
        document = document.add(path);
    }

    // Terminals.
    for (x, y, cell) in grid.cells() {
        let (label, color) = match cell {
            Cell::Source => ('*', "#ff8080"),
            Cell::Sink(label) => (label, "#80ff80"),
            Cell::Pipe(_) => continue,
        };
        let (cx, cy) = center(x, y);

        let circle = svg::node::element::Circle::new()
            .set("cx", cx)
            .set("cy", cy)
            .set("r", CELL * 0.4)
            .set("fill", color)
            .set("stroke", "black")
            .set("stroke-width", 2)
            .set("title", format!("{} ({}, {})", label, x, y));
        document = document.add(circle);

        let mut text = Element::new("text");
        text.assign("x", cx);
        text.assign("y", cy + 7.0);
        text.assign("text-anchor", "middle");
        text.assign("font-size", "20px");
        text.append(TextNode::new(label.to_string()));
        document = document.add(text);
    }

    document.to_string()
}
