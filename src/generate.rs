// src/generate.rs
//! Synthetic `station;value` input for exercising the aggregator.
use std::io::{BufRead, BufWriter, Write};

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use crate::args::GenerateArgs;
use crate::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub name: String,
    pub mean: f64,
}

/// Read `name;mean` lines. Blank lines and lines starting with `#` are ignored.
pub fn read_stations<R: BufRead>(input: R) -> Result<Vec<Station>> {
    let mut stations = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let line = line?;
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (name, mean) = line
            .split_once(';')
            .ok_or_else(|| AppError::Generate(format!("station list line {}: missing ';'", i + 1)))?;
        let mean = mean.trim().parse::<f64>().map_err(|e| {
            AppError::Generate(format!("station list line {}: bad mean {mean:?}: {e}", i + 1))
        })?;
        stations.push(Station {
            name: name.to_string(),
            mean,
        });
    }
    Ok(stations)
}

/// Normal samples via the Marsaglia polar method, which yields two per draw.
#[derive(Debug, Default)]
pub struct Gaussian {
    spare: Option<f64>,
}

impl Gaussian {
    pub fn sample<R: Rng>(&mut self, rng: &mut R) -> f64 {
        if let Some(v) = self.spare.take() {
            return v;
        }
        loop {
            let u: f64 = rng.gen_range(-1.0..1.0);
            let v: f64 = rng.gen_range(-1.0..1.0);
            let s = u * u + v * v;
            if s > 0.0 && s < 1.0 {
                let scale = (-2.0 * s.ln() / s).sqrt();
                self.spare = Some(v * scale);
                return u * scale;
            }
        }
    }
}

/// Write `rows` lines drawn from `keys` randomly chosen stations.
///
/// Returns the number of distinct stations actually used.
pub fn generate<R: Rng, W: Write>(
    stations: &[Station],
    rows: u64,
    keys: usize,
    stddev: f64,
    rng: &mut R,
    out: &mut W,
) -> Result<usize> {
    if stations.is_empty() {
        return Err(AppError::Generate("station list is empty".to_string()));
    }
    let keys = if keys > stations.len() {
        log::warn!(
            "only {} stations available, using all of them instead of {keys}",
            stations.len()
        );
        stations.len()
    } else {
        keys
    };

    let selected: Vec<&Station> = index::sample(rng, stations.len(), keys)
        .into_iter()
        .map(|i| &stations[i])
        .collect();

    let mut gaussian = Gaussian::default();
    for _ in 0..rows {
        let station = selected[rng.gen_range(0..selected.len())];
        let value = station.mean + gaussian.sample(rng) * stddev;
        writeln!(out, "{};{value:.1}", station.name)?;
    }
    Ok(keys)
}

/// `keystats generate`: station list on stdin, measurements on stdout.
pub fn run(args: &GenerateArgs) -> Result<()> {
    let stations = read_stations(std::io::stdin().lock())?;
    log::info!("read {} stations", stations.len());

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut out = BufWriter::new(std::io::stdout().lock());
    let used = generate(&stations, args.rows, args.keys, args.stddev, &mut rng, &mut out)?;
    out.flush()?;
    log::info!("wrote {} rows over {used} stations", args.rows);
    Ok(())
}
