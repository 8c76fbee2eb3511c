use anyhow::{bail, Result};

use nova_lib::dashboard::{slides, Carousel};

use crate::render::terminal::{heading, paint, Color};
use crate::OutputFormat;

pub fn run(start: usize, format: &OutputFormat, use_color: bool) -> Result<()> {
    let Some(mut carousel) = Carousel::new(slides()) else {
        bail!("No slides configured");
    };
    if start == 0 || !carousel.go_to(start - 1) {
        bail!("Slide {} does not exist (1-{})", start, carousel.len());
    }

    // walk the full loop from the starting slide
    let mut ordered = Vec::with_capacity(carousel.len());
    for _ in 0..carousel.len() {
        ordered.push((carousel.counter(), carousel.current().clone()));
        carousel.next();
    }

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = ordered
                .iter()
                .map(|(counter, slide)| serde_json::json!({ "position": counter, "slide": slide }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            for (counter, slide) in &ordered {
                println!(
                    "{} {}",
                    paint(counter, Color::GRAY, use_color),
                    paint(&slide.eyebrow.to_uppercase(), Color::BLUE, use_color)
                );
                let title = format!("{} {}", slide.title_main, slide.title_accent);
                println!("{}", heading(&title, use_color));
                println!("{}", slide.description);
                print!("  > {} ({})", slide.primary_cta.label, slide.primary_cta.href);
                if let Some(cta) = &slide.secondary_cta {
                    print!("   > {} ({})", cta.label, cta.href);
                }
                println!("\n");
            }
        }
    }

    Ok(())
}
