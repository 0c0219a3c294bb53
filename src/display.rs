use colored::{ColoredString, Colorize};

use crate::config::Algorithm;
use crate::step::{Phase, Span, Step};

/// Paints one step as a row of value boxes. Merge-sort steps carry a span
/// list and render grouped; everything else renders as a flat row styled by
/// the algorithm's highlight roles.
pub fn render_step(step: &Step, algorithm: Algorithm) -> String {
    match &step.subarrays {
        Some(spans) => render_grouped_row(step, spans),
        None => render_flat_row(step, algorithm),
    }
}

fn render_flat_row(step: &Step, algorithm: Algorithm) -> String {
    let mut buffer = String::new();
    for (index, value) in step.array.iter().enumerate() {
        let symbol = format!("[{:>2}]", value.to_string());
        let styled = match algorithm {
            Algorithm::Insertion => style_insertion(step, index, &symbol),
            _ => style_bubble(step, index, &symbol),
        };
        buffer += &format!("{}", styled);
    }
    buffer
}

fn render_grouped_row(step: &Step, spans: &[Span]) -> String {
    let mut groups = Vec::with_capacity(spans.len());
    for span in spans {
        let mut group = String::new();
        for index in span.start..=span.end {
            let symbol = format!("[{:>2}]", step.array[index].to_string());
            group += &format!("{}", style_merge(step, index, &symbol));
        }
        groups.push(group);
    }
    groups.join("  ")
}

fn style_insertion(step: &Step, index: usize, symbol: &str) -> ColoredString {
    if step.current == Some(index) {
        symbol.bright_yellow().bold()
    } else if step.compared == Some(index) {
        symbol.bright_cyan()
    } else if step.insertion_point == Some(index) {
        symbol.bright_magenta()
    } else if step.inserted_after == Some(index) {
        symbol.bright_blue()
    } else if step.sorted_count.map_or(false, |sorted| index < sorted) {
        symbol.green()
    } else {
        symbol.white()
    }
}

fn style_bubble(step: &Step, index: usize, symbol: &str) -> ColoredString {
    if step.final_position == Some(index) {
        symbol.bright_green().bold()
    } else if step.current == Some(index) || step.compared == Some(index) {
        if step.swapped {
            symbol.bright_red()
        } else {
            symbol.bright_yellow()
        }
    } else if step
        .sorted_count
        .map_or(false, |sorted| index >= step.array.len() - sorted)
    {
        symbol.green()
    } else {
        symbol.white()
    }
}

fn style_merge(step: &Step, index: usize, symbol: &str) -> ColoredString {
    if step.comparing_left == Some(index) {
        symbol.bright_cyan().bold()
    } else if step.comparing_right == Some(index) {
        symbol.bright_magenta().bold()
    } else if step.selected == Some(index) {
        symbol.bright_green().bold()
    } else if step.merging_left.map_or(false, |span| span.contains(index)) {
        symbol.on_truecolor(140, 140, 140)
    } else if step.merging_right.map_or(false, |span| span.contains(index)) {
        symbol.on_truecolor(180, 180, 180)
    } else if step.phase == Some(Phase::Dividing) {
        symbol.bright_blue()
    } else {
        symbol.white()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    fn nums(values: &[u8]) -> Vec<Element> {
        values.iter().map(|&n| Element::Number(n)).collect()
    }

    fn plain(step: &Step, algorithm: Algorithm) -> String {
        colored::control::set_override(false);
        let rendered = render_step(step, algorithm);
        colored::control::unset_override();
        rendered
    }

    #[test]
    fn flat_rows_box_every_value() {
        let step = Step {
            array: nums(&[3, 1, 42]),
            ..Step::default()
        };
        assert_eq!(plain(&step, Algorithm::Bubble), "[ 3][ 1][42]");
    }

    #[test]
    fn merge_rows_separate_span_groups() {
        let step = Step {
            array: nums(&[3, 1, 2]),
            subarrays: Some(vec![Span::new(0, 1), Span::single(2)]),
            phase: Some(Phase::Merging),
            ..Step::default()
        };
        assert_eq!(plain(&step, Algorithm::Merge), "[ 3][ 1]  [ 2]");
    }

    #[test]
    fn letters_render_inside_boxes() {
        let step = Step {
            array: vec![Element::Letter('A'), Element::Letter('Z')],
            ..Step::default()
        };
        assert_eq!(plain(&step, Algorithm::Insertion), "[ A][ Z]");
    }
}
