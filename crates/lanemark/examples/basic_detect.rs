use lanemark::{detect, load_frame, DetectionParameters};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <image.png> <out.png> [report.json]", args[0]);
        std::process::exit(2);
    }

    let frame = load_frame(&args[1])?;
    let result = detect(&frame, &DetectionParameters::default())?;

    let stats = result.stats();
    match stats.mean_length_px {
        Some(mean) => println!(
            "Detected {} segments (mean length {:.1} px).",
            stats.count, mean
        ),
        None => println!("No segments detected."),
    }

    result.annotated.save(&args[2])?;
    println!("Wrote {}", args[2]);

    if let Some(report_path) = args.get(3) {
        let json = serde_json::to_string_pretty(&result.summary())?;
        std::fs::write(report_path, json)?;
        println!("Wrote {report_path}");
    }
    Ok(())
}
