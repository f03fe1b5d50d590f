use super::*;
use worksheet::config::STEP_WHOLE;

#[test]
fn test_step_decimals_follow_step_size() {
    assert_eq!(step_decimals(STEP_FINE), 2);
    assert_eq!(step_decimals(STEP_DEFAULT), 1);
    assert_eq!(step_decimals(STEP_WHOLE), 0);
}

#[test]
fn test_default_ratios_survive_slider_round_trip() {
    for ratio in [0.0, 0.2, 0.8, 1.0] {
        let percent = ratio_to_percent(ratio);
        assert_eq!(percent_to_ratio(percent), ratio);
    }
}

#[test]
fn test_ratio_to_percent_clamps_out_of_range() {
    assert_eq!(ratio_to_percent(1.7), 100);
    assert_eq!(ratio_to_percent(-0.3), 0);
}
