use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

struct Launch {
    flight_number: i64,
    site: &'static str,
    payload_mass: f64,
    class: i64,
    category: &'static str,
}

fn generate_launches(rng: &mut SimpleRng) -> Vec<Launch> {
    let sites = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];

    // (category, launches per site, payload mean, payload std dev, success rate)
    let categories: [(&str, usize, f64, f64, f64); 5] = [
        ("v1.0", 2, 500.0, 200.0, 0.40),
        ("v1.1", 3, 2700.0, 900.0, 0.75),
        ("FT", 6, 4300.0, 1800.0, 0.88),
        ("B4", 4, 5200.0, 2200.0, 0.92),
        ("B5", 5, 5800.0, 2500.0, 0.97),
    ];

    let mut launches = Vec::new();
    let mut flight_number: i64 = 1;
    for &site in &sites {
        for &(category, count, mean, std_dev, success_rate) in &categories {
            for _ in 0..count {
                let payload_mass = rng.gauss(mean, std_dev).clamp(0.0, 9600.0);
                let class = i64::from(rng.next_f64() < success_rate);
                launches.push(Launch {
                    flight_number,
                    site,
                    payload_mass: (payload_mass * 10.0).round() / 10.0,
                    class,
                    category,
                });
                flight_number += 1;
            }
        }
    }
    launches
}

fn write_csv(path: &str, launches: &[Launch]) {
    let mut writer = csv::Writer::from_path(path).expect("Failed to create output file");
    writer
        .write_record([
            "Flight Number",
            "Launch Site",
            "class",
            "Payload Mass (kg)",
            "Booster Version Category",
        ])
        .expect("Failed to write header");
    for launch in launches {
        writer
            .write_record([
                launch.flight_number.to_string(),
                launch.site.to_string(),
                launch.class.to_string(),
                format!("{:.1}", launch.payload_mass),
                launch.category.to_string(),
            ])
            .expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush CSV");
}

fn write_json(path: &str, launches: &[Launch]) {
    let rows: Vec<serde_json::Value> = launches
        .iter()
        .map(|launch| {
            serde_json::json!({
                "Flight Number": launch.flight_number,
                "Launch Site": launch.site,
                "class": launch.class,
                "Payload Mass (kg)": launch.payload_mass,
                "Booster Version Category": launch.category,
            })
        })
        .collect();
    let file = std::fs::File::create(path).expect("Failed to create output file");
    serde_json::to_writer_pretty(file, &rows).expect("Failed to write JSON");
}

fn write_parquet(path: &str, launches: &[Launch]) {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Flight Number", DataType::Int64, false),
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("class", DataType::Int64, false),
        Field::new("Payload Mass (kg)", DataType::Float64, false),
        Field::new("Booster Version Category", DataType::Utf8, false),
    ]));

    let flight_array =
        Int64Array::from(launches.iter().map(|l| l.flight_number).collect::<Vec<_>>());
    let site_array = StringArray::from(launches.iter().map(|l| l.site).collect::<Vec<_>>());
    let class_array = Int64Array::from(launches.iter().map(|l| l.class).collect::<Vec<_>>());
    let mass_array =
        Float64Array::from(launches.iter().map(|l| l.payload_mass).collect::<Vec<_>>());
    let category_array =
        StringArray::from(launches.iter().map(|l| l.category).collect::<Vec<_>>());

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(flight_array),
            Arc::new(site_array),
            Arc::new(class_array),
            Arc::new(mass_array),
            Arc::new(category_array),
        ],
    )
    .expect("Failed to create RecordBatch");

    let file = std::fs::File::create(path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "spacex_launch_sample.csv".to_string());

    let mut rng = SimpleRng::new(42);
    let launches = generate_launches(&mut rng);

    let extension = std::path::Path::new(&output_path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => write_csv(&output_path, &launches),
        "json" => write_json(&output_path, &launches),
        "parquet" | "pq" => write_parquet(&output_path, &launches),
        other => {
            eprintln!("Unsupported output extension: .{other}");
            std::process::exit(1);
        }
    }

    let successes = launches.iter().filter(|l| l.class == 1).count();
    println!(
        "Wrote {} launch records ({} successful) to {output_path}",
        launches.len(),
        successes
    );
}
