use keystats_engine::options::Options;
use keystats_engine::{aggregate, run};
use proptest::prelude::*;

fn observations() -> impl Strategy<Value = Vec<(String, i32)>> {
    prop::collection::vec(("[A-Za-z]{1,4}", -999i32..=999), 0..200)
}

fn to_input(obs: &[(String, i32)]) -> String {
    obs.iter()
        .map(|(key, tenths)| format!("{key};{:.1}\n", f64::from(*tenths) / 10.0))
        .collect()
}

fn render(input: &str) -> Vec<u8> {
    let mut out = Vec::new();
    run(input.as_bytes(), &mut out, &Options::default()).unwrap();
    out
}

proptest! {
    #[test]
    fn reordering_across_keys_does_not_change_output(obs in observations()) {
        // A stable sort by key moves lines between keys but keeps each key's own order.
        let mut grouped = obs.clone();
        grouped.sort_by(|a, b| a.0.cmp(&b.0));
        prop_assert_eq!(render(&to_input(&obs)), render(&to_input(&grouped)));
    }

    #[test]
    fn merging_split_runs_matches_one_run(obs in observations(), split in any::<prop::sample::Index>()) {
        let at = split.index(obs.len() + 1);
        let (head, _) = aggregate(to_input(&obs[..at]).as_bytes(), &Options::default()).unwrap();
        let (tail, _) = aggregate(to_input(&obs[at..]).as_bytes(), &Options::default()).unwrap();
        let (whole, _) = aggregate(to_input(&obs).as_bytes(), &Options::default()).unwrap();

        for (key, expected) in whole.into_sorted() {
            let merged = match (head.get(&key), tail.get(&key)) {
                (Some(h), Some(t)) => {
                    let mut m = *h;
                    m.merge(t);
                    m
                }
                (Some(only), None) | (None, Some(only)) => *only,
                (None, None) => unreachable!("key missing from both halves"),
            };
            prop_assert_eq!(merged.count, expected.count);
            prop_assert_eq!(merged.min, expected.min);
            prop_assert_eq!(merged.max, expected.max);
            prop_assert!((merged.sum - expected.sum).abs() < 1e-6);
        }
    }

    #[test]
    fn same_input_same_output(obs in observations()) {
        let input = to_input(&obs);
        prop_assert_eq!(render(&input), render(&input));
    }

    #[test]
    fn keys_strictly_ascending_and_unique(obs in observations()) {
        let (acc, summary) = aggregate(to_input(&obs).as_bytes(), &Options::default()).unwrap();
        let rows = acc.into_sorted();
        prop_assert_eq!(rows.len(), summary.keys);
        prop_assert!(rows.windows(2).all(|w| w[0].0 < w[1].0));
        prop_assert_eq!(summary.records, obs.len() as u64);
    }

    #[test]
    fn every_value_within_min_max(obs in observations()) {
        let (acc, _) = aggregate(to_input(&obs).as_bytes(), &Options::default()).unwrap();
        for (key, tenths) in &obs {
            let value = f64::from(*tenths) / 10.0;
            let stat = acc.get(key.as_bytes()).unwrap();
            prop_assert!(stat.min <= value && value <= stat.max);
            prop_assert!(stat.min <= stat.max);
        }
    }

    #[test]
    fn mean_matches_naive_mean(obs in observations()) {
        let (acc, _) = aggregate(to_input(&obs).as_bytes(), &Options::default()).unwrap();
        for (key, stat) in acc.into_sorted() {
            let values: Vec<f64> = obs
                .iter()
                .filter(|(k, _)| k.as_bytes() == &*key)
                .map(|(_, t)| f64::from(*t) / 10.0)
                .collect();
            let naive = values.iter().sum::<f64>() / values.len() as f64;
            prop_assert_eq!(stat.count, values.len() as u64);
            prop_assert!((stat.mean() - naive).abs() < 1e-9);
        }
    }
}
