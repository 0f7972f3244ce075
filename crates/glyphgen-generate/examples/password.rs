use glyphgen_core::{ExcludeGroup, GenerateOptions, IncludeGroup, RangeSpec};
use glyphgen_generate::generate;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Password policy: 16 characters, at least one lowercase, one uppercase,
    // two digits, and one punctuation mark, with look-alikes excluded.
    let options = GenerateOptions {
        include: vec![
            IncludeGroup {
                chars: vec![RangeSpec::interval('a', 'z')],
                min: 1,
            },
            IncludeGroup {
                chars: vec![RangeSpec::interval('A', 'Z')],
                min: 1,
            },
            IncludeGroup {
                chars: vec![RangeSpec::interval('0', '9')],
                min: 2,
            },
            IncludeGroup {
                chars: vec![RangeSpec::interval('!', '/')],
                min: 1,
            },
        ],
        exclude: vec![ExcludeGroup {
            chars: vec![
                RangeSpec::single('l'),
                RangeSpec::single('I'),
                RangeSpec::single('O'),
                RangeSpec::single('0'),
            ],
        }],
    };

    println!("{}", generate(16, &options)?);
    Ok(())
}
