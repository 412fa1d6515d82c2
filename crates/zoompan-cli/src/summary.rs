use console::Style;
use zoompan_core::color::Rgb;
use zoompan_core::config::ViewportConfig;
use zoompan_core::controller::ViewController;
use zoompan_core::event::ViewEvent;
use zoompan_core::linked::LinkedValue;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    changed: Style,
    unchanged: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            changed: Style::new().green(),
            unchanged: Style::new().dim().yellow(),
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!(
        "  {}",
        s.title.apply_to("\u{2550}".repeat(title.chars().count()))
    );
    println!();
}

pub fn print_step(index: usize, event: &ViewEvent, redraw: bool, controller: &ViewController) {
    let s = Styles::new();
    let marker = if redraw {
        s.changed.apply_to("redraw")
    } else {
        s.unchanged.apply_to("no-op ")
    };
    println!(
        "  {:>4}  {:<24} {}  zoom {:>3}  {}",
        s.label.apply_to(index),
        event.to_string(),
        marker,
        controller.zoom_level(),
        controller.snapshot()
    );
}

pub fn print_replay_summary(
    controller: &ViewController,
    viewport: &ViewportConfig,
    events: usize,
    redraws: usize,
) {
    let s = Styles::new();
    let t = controller.snapshot();

    print_title(&s, "View Transform");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Viewport"),
        s.value.apply_to(format!("{}x{}", viewport.width, viewport.height))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Events"),
        s.value.apply_to(events)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Redraws"),
        s.value.apply_to(redraws)
    );
    println!();

    println!("  {}", s.header.apply_to("Zoom"));
    let (min, max) = controller.zoom_bounds();
    println!(
        "    {:<12}{} {}",
        s.label.apply_to("Level"),
        s.value.apply_to(controller.zoom_level()),
        s.label.apply_to(format!("({min}..={max})"))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Scale"),
        s.value.apply_to(format!("{:.4}x", controller.scale()))
    );
    println!();

    println!("  {}", s.header.apply_to("Matrix"));
    println!(
        "    {}",
        s.value
            .apply_to(format!("{:>12.6} {:>12.6} {:>12.6}", t.m00, t.m01, t.m02))
    );
    println!(
        "    {}",
        s.value
            .apply_to(format!("{:>12.6} {:>12.6} {:>12.6}", t.m10, t.m11, t.m12))
    );
    println!();
}

pub fn print_colors(entries: &[(String, Rgb)]) {
    let s = Styles::new();
    print_title(&s, "Colors");

    let width = entries.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    for (label, color) in entries {
        let swatch = Style::new().color256(nearest_ansi256(*color));
        println!(
            "  {}  {:<width$}  {}",
            swatch.apply_to("\u{2588}\u{2588}"),
            s.label.apply_to(label),
            s.value.apply_to(color),
        );
    }
    println!();
}

pub fn print_linked_value(linked: &LinkedValue, changes: usize) {
    let s = Styles::new();
    print_title(&s, "Linked Value");

    let bar = linked.scrollbar();
    let spinner = linked.spinner();

    println!("  {}", s.header.apply_to("Spinner"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Value"),
        s.value.apply_to(spinner.value())
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Range"),
        s.value.apply_to(format!(
            "{}..={} step {}",
            spinner.min(),
            spinner.max(),
            spinner.step()
        ))
    );
    println!();

    println!("  {}", s.header.apply_to("Scrollbar"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Value"),
        s.value.apply_to(bar.value())
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Range"),
        s.value.apply_to(format!(
            "{}..{} extent {}",
            bar.range().min(),
            bar.range().max(),
            bar.range().extent()
        ))
    );
    println!("    {}", render_track(linked, 40));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Changes"),
        s.value.apply_to(changes)
    );
    println!();
}

/// Text scrollbar with the thumb sized to the visible extent.
fn render_track(linked: &LinkedValue, cells: usize) -> String {
    let range = linked.scrollbar().range();
    let span = f64::from(range.max() - range.min()).max(1.0);
    let start = f64::from(range.value() - range.min()) / span;
    let len = f64::from(range.extent()) / span;

    let first = (start * cells as f64).round() as usize;
    let thumb = ((len * cells as f64).round() as usize).max(1);
    (0..cells)
        .map(|i| {
            if i >= first && i < first + thumb {
                '\u{2588}'
            } else {
                '\u{2591}'
            }
        })
        .collect()
}

/// Closest entry in the xterm 6x6x6 color cube.
fn nearest_ansi256(color: Rgb) -> u8 {
    let level = |c: u8| -> u8 {
        if c < 48 {
            0
        } else if c < 115 {
            1
        } else {
            (c - 35) / 40
        }
    };
    16 + 36 * level(color.r) + 6 * level(color.g) + level(color.b)
}
