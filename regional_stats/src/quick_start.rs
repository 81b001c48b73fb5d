/*!

# Quick start

This example runs the statistics end to end from the command line.

Download the dataset and the scorecards from the public API (or use the samples of
the `testdata` directory):

```bash
curl -o us_dataset.json https://<api host>/api/public/us_dataset
curl -o state_scorecard.json https://<api host>/api/public/state_scorecard
```

Run `vpstats` on these files:

```bash
vpstats --input us_dataset.json --scorecards state_scorecard.json --out summary.json
```

The summary contains the statistics of the country, of every state and of every county.
To look at a single state or county:

```bash
vpstats --input us_dataset.json --state MO
vpstats --input us_dataset.json --state MO --county Adair
```

The same inputs can be described in a configuration file:

```json
{
  "outputSettings": {
    "title": "Voter purges",
    "snapshotDate": "2024-01-01"
  },
  "datasetPath": "us_dataset.json",
  "scorecardPath": "state_scorecard.json"
}
```

```bash
vpstats --config config.json
```

Paths in the configuration file are relative to the directory of this file.

## From Rust

```
use regional_stats::builder::Builder;
use regional_stats::{IndexedDataset, Scorecard};

#[derive(Clone)]
struct Stars { state: String, stars: u8 }

impl Scorecard for Stars {
    fn state_code(&self) -> &str { &self.state }
}

let mut builder = Builder::new();
builder.add_state("29", "MO", "Missouri")?;
builder.add_county_simple("MO", "29001", "Adair", Some("2.0"))?;
builder.add_county_simple("MO", "29003", "Andrew", Some("4.0"))?;

let cards = vec![Stars { state: "MO".to_string(), stars: 2 }];
let dataset = IndexedDataset::new(builder.enrich(&cards));
let mo = dataset.state("MO")?.expect("missing state");
assert_eq!(mo.scorecard.as_ref().map(|c| c.stars), Some(2));
let adair = dataset.county("MO", "Adair")?.expect("missing county");
assert!(adair.purged_percentage_state_z.unwrap() < 0.0);
# Ok::<(), regional_stats::StatsErrors>(())
```
*/
