use chrono::NaiveDate;
use heliomet::{HeliometError, LatLon, PowerClient};
use std::env;

fn main() -> Result<(), HeliometError> {
    configure_polars_display();
    let client = PowerClient::new()?;

    let payload = client
        .fetch()
        .parameters(&["T2M", "WSC"])
        .location(LatLon(0.0, 0.0))
        .start(NaiveDate::from_ymd_opt(2017, 1, 1).unwrap())
        .end(NaiveDate::from_ymd_opt(2017, 2, 1).unwrap())
        .extra_params(&[
            ("wind_surface", "SeaIce".into()),
            ("wind_elevation", 50.into()),
        ])
        .call()?;

    if let Some(frame) = payload.as_table() {
        println!("{}", frame.head(Some(5)));
    }

    Ok(())
}

fn configure_polars_display() {
    // show every column
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    // show 20 rows
    env::set_var("POLARS_FMT_MAX_ROWS", "20");
}
