use super::*;

#[test]
fn date_portion_strips_the_time_component() {
    assert_eq!(date_portion("2024-05-01T12:00:00Z"), "2024-05-01");
}

#[test]
fn date_portion_passes_through_bare_dates() {
    assert_eq!(date_portion("2024-05-01"), "2024-05-01");
}

#[test]
fn display_date_falls_back_to_the_date_portion_off_browser() {
    assert_eq!(display_date("2024-05-01T12:00:00Z"), "2024-05-01");
    assert_eq!(display_date("not a date"), "not a date");
}
