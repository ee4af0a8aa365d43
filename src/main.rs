use std::env;

use anyhow::Context;
use log::info;
use machine_learning::{Dataset, train_model};
use perceptron::{Args, TrainingReport, config::USAGE, load_config};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse(env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = load_config(args.config.as_deref())?;
    info!(
        class_size = config.class_size,
        learning_rate = config.learning_rate,
        epochs = config.num_training_epochs,
        seed = config.seed;
        "generating dataset"
    );

    let dataset = Dataset::from_config(&config);
    let trajectory = train_model(&dataset, config.learning_rate, config.num_training_epochs)?;
    let report = TrainingReport::new(&config, &dataset, &trajectory);

    if args.json {
        let json = report.to_json().context("failed to serialize the report")?;
        println!("{json}");
    } else {
        print!("{report}");
    }

    Ok(())
}
