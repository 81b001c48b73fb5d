/*!

This is the long-form manual for `regional_stats` and `vpstats`.

## Input formats

### Dataset

The upstream dataset is a JSON document listing the states and, for each state,
its counties keyed by their FIPS code:

```json
{
  "states": [
    {
      "code": "29",
      "abv": "MO",
      "name": "Missouri",
      "counties": {
        "29001": {
          "county": "Adair",
          "average_total_voters": 15000,
          "dropped_voters": 300,
          "new_voters": 120,
          "purged_percentage": "2.0"
        }
      }
    }
  ]
}
```

Notes:
- `code` is the FIPS code of the state and `abv` its postal code. In the output,
  `code` is the postal code and `fips` the FIPS code.
- numbers may be written as JSON numbers or as strings
- `purged_percentage` is a percentage (`"2.0"` for 2%). It is stored as a fraction
  (`0.02`). A `null` value means that no data is available: the county is kept but it
  is not part of the statistics of this field.

### Scorecards

A JSON array of objects with at least a `state` field (postal code). The other fields
(`stars`, `categories`) are copied to the output without interpretation.

## Statistics

For each state and for the whole country, the `count`, `sum`, `mean` and `std`
(population standard deviation) are computed over the counties for
`average_total_voters`, `dropped_voters` and `purged_percentage`.

The z-legend gives, for the offsets -2, -1, 0, 1 and 2, the purge percentage
`mean + offset * std` of the region.

Each county receives two z-scores: against the counties of its state
(`purged_percentage_state_z`) and against all the counties of the country
(`purged_percentage_country_z`). Each state receives the z-score of its mean against
the country (`purged_percentage_country_z`).

There is no special treatment when a standard deviation is zero (for example a state
with a single county): the z-scores are then not numbers, and they are written as
`null` in the JSON output.

## Lookups

`IndexedCollection` answers `find_one` and `find_many` queries on any field of the
records. The first query on a field builds an index over this field. The values are
compared through their text rendering: missing values render as `null`, and numbers
render without a trailing `.0` (`15000`, `0.025`).
*/
