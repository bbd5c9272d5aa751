use clap::Parser;
use enrollment_stats::cli::{Args, OutputFormat};
use enrollment_stats::dataset::{load_cube, ALL_YEARS, YEAR_2013};
use enrollment_stats::prompt::{prompt_for_school, PROMPT};
use enrollment_stats::report::{render_shape, GeneralReport, SchoolReport, DEFAULT_THRESHOLD};
use enrollment_stats::statistics::ThresholdMedian;
use enrollment_stats::SchoolDirectory;
use std::io::Cursor;

#[test]
fn test_bundled_dataset_shape() {
    assert_eq!(ALL_YEARS.len(), 10);
    assert!(ALL_YEARS.iter().all(|year| year.len() == 60));

    let cube = load_cube().expect("Bundled dataset should load");
    assert_eq!(cube.shape(), (10, 20, 3));
    assert_eq!(cube.value_at(0, 0, 0).unwrap(), YEAR_2013[0]);

    let mut banner = Vec::new();
    render_shape(&cube, &mut banner).unwrap();
    assert_eq!(
        String::from_utf8(banner).unwrap(),
        "Array has 3 dimensions.\nArray Shape: (10, 20, 3)\n"
    );
}

#[test]
fn test_school_report_for_centennial() {
    let cube = load_cube().unwrap();
    let directory = SchoolDirectory::calgary();
    let index = directory.resolve("1224").unwrap();

    let report = SchoolReport::compute(&cube, &directory, index, DEFAULT_THRESHOLD).unwrap();
    assert_eq!(report.name, "Centennial High School");
    assert_eq!(report.code, 1224);
    assert_eq!(report.grade_averages, [Ok(492), Ok(481), Ok(459)]);
    assert_eq!(report.highest, Ok(549));
    assert_eq!(report.lowest, Ok(425));

    let totals: Vec<Option<i64>> = report.yearly_totals.iter().map(|(_, t)| t).collect();
    assert_eq!(
        totals,
        [1363, 1439, 1371, 1427, 1356, 1442, 1482, 1493, 1459, 1504]
            .map(Some)
            .to_vec()
    );
    assert_eq!(report.ten_year_total, Ok(14336));
    assert_eq!(report.mean_yearly_total, Ok(1433));
    assert_eq!(report.median_above_threshold, Ok(ThresholdMedian::Median(515)));
}

#[test]
fn test_school_report_with_missing_years() {
    let cube = load_cube().unwrap();
    let directory = SchoolDirectory::calgary();
    let index = directory.resolve("Robert Thirsk School").unwrap();

    let report = SchoolReport::compute(&cube, &directory, index, DEFAULT_THRESHOLD).unwrap();
    assert_eq!(report.grade_averages, [Ok(393), Ok(384), Ok(375)]);
    let totals = report.yearly_totals.to_vec();
    assert_eq!(totals[0], None);
    assert_eq!(totals[1], None);
    assert_eq!(totals[2], Some(1134));
    assert_eq!(report.ten_year_total, Ok(9231));
    assert_eq!(report.mean_yearly_total, Ok(1153));
    assert_eq!(
        report.median_above_threshold,
        Ok(ThresholdMedian::NoDataAboveThreshold)
    );

    let mut text = Vec::new();
    report.render_text(&mut text).unwrap();
    let text = String::from_utf8(text).unwrap();
    assert!(text.contains("Total Enrollment in 2013 was: n/a"));
    assert!(text.contains("Total Enrollment in 2015 was: 1134"));
    assert!(text.contains("No enrollments over 500"));

    let json = report.to_json();
    assert_eq!(json["code"], 1679);
    assert!(json["median_above_threshold"].is_null());
    assert!(json["yearly_totals"][0]["total"].is_null());
    assert_eq!(json["yearly_totals"][2]["year"], 2015);
}

#[test]
fn test_school_report_text() {
    let cube = load_cube().unwrap();
    let directory = SchoolDirectory::calgary();
    let report = SchoolReport::compute(&cube, &directory, 2, DEFAULT_THRESHOLD).unwrap();

    let mut text = Vec::new();
    report.render_text(&mut text).unwrap();
    let text = String::from_utf8(text).unwrap();

    assert!(text.contains("***Requested School Statistics***"));
    assert!(text.contains("School name: Louise Dean School\nSchool code: 9626\n"));
    assert!(text.contains("Average Grade 10 Enrollment: 120\n"));
    assert!(text.contains("Average Grade 11 Enrollment: 97\n"));
    assert!(text.contains("Average Grade 12 Enrollment: 68\n"));
    assert!(text.contains("Highest enrollment for a single grade for entire time period: 148\n"));
    assert!(text.contains("Lowest enrollment for a single grade for entire time period: 23\n"));
    assert!(text.contains("Total Enrollment in 2022 was: 350\n"));
    assert!(text.contains("Total ten year enrollment: 2527\n"));
    assert!(text.contains("Mean total yearly enrollment over 10 years: 252\n"));
    assert!(text.ends_with("No enrollments over 500\n"));
}

#[test]
fn test_custom_threshold() {
    let cube = load_cube().unwrap();
    let directory = SchoolDirectory::calgary();
    let report = SchoolReport::compute(&cube, &directory, 2, 100.0).unwrap();
    assert!(matches!(report.median_above_threshold, Ok(ThresholdMedian::Median(_))));

    let mut text = Vec::new();
    report.render_text(&mut text).unwrap();
    let text = String::from_utf8(text).unwrap();
    assert!(text.contains("Median enrollments for all instances of enrollments greater than 100: "));
}

#[test]
fn test_general_report() {
    let cube = load_cube().unwrap();
    let report = GeneralReport::compute(&cube).unwrap();

    assert_eq!(report.first_year, 2013);
    assert_eq!(report.last_year, 2022);
    assert_eq!(report.mean_first_year, Ok(423));
    assert_eq!(report.mean_last_year, Ok(461));
    assert_eq!(report.graduating_class, Ok(8617));
    assert_eq!(report.highest, Ok(738));
    assert_eq!(report.lowest, Ok(23));

    let mut text = Vec::new();
    report.render_text(&mut text).unwrap();
    let text = String::from_utf8(text).unwrap();
    assert!(text.contains("***General Statistics for All Schools***"));
    assert!(text.contains("Mean enrollment in 2013 was 423\n"));
    assert!(text.contains("Mean enrollment in 2022 was 461\n"));
    assert!(text.contains("Total graduating class of 2022 across all schools was 8617\n"));

    let json = report.to_json();
    assert_eq!(json["graduating_class"], 8617);
    assert_eq!(json["lowest"], 23);
}

#[test]
fn test_prompt_retries_unknown_school() {
    let directory = SchoolDirectory::calgary();
    let mut input = Cursor::new("Not A School\ncentennial high school\r\nNational Sport School\n");
    let mut output = Vec::new();

    let index = prompt_for_school(&directory, &mut input, &mut output).unwrap();
    assert_eq!(index, Some(11));

    let output = String::from_utf8(output).unwrap();
    assert_eq!(output.matches(PROMPT).count(), 3);
    assert_eq!(
        output
            .matches("Not a valid school name or school code. Please try again.")
            .count(),
        2
    );
}

#[test]
fn test_prompt_accepts_code() {
    let directory = SchoolDirectory::calgary();
    let mut input = Cursor::new("9857\n");
    let mut output = Vec::new();
    assert_eq!(
        prompt_for_school(&directory, &mut input, &mut output).unwrap(),
        Some(16)
    );
}

#[test]
fn test_prompt_end_of_input() {
    let directory = SchoolDirectory::calgary();
    let mut input = Cursor::new("Not A School\n");
    let mut output = Vec::new();
    assert_eq!(
        prompt_for_school(&directory, &mut input, &mut output).unwrap(),
        None
    );
}

#[test]
fn test_cli_arguments() {
    let args = Args::try_parse_from(["enrollment-stats"]).unwrap();
    assert_eq!(args.school, None);
    assert_eq!(args.threshold, 500.0);
    assert_eq!(args.format, OutputFormat::Text);
    assert!(!args.verbose);
    assert!(!args.list_schools);

    let args = Args::try_parse_from([
        "enrollment-stats",
        "--school",
        "Bowness High School",
        "--threshold",
        "450",
        "--format",
        "json",
        "-v",
    ])
    .unwrap();
    assert_eq!(args.school.as_deref(), Some("Bowness High School"));
    assert_eq!(args.threshold, 450.0);
    assert_eq!(args.format, OutputFormat::Json);
    assert!(args.verbose);

    assert!(Args::try_parse_from(["enrollment-stats", "--threshold", "lots"]).is_err());
    assert!(Args::try_parse_from(["enrollment-stats", "--format", "xml"]).is_err());
}
