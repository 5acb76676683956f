use toprated::types::{BasicInformation, CollectionItem, Release};
use toprated::utils::*;

// Helper function to create a test release
fn create_test_release(id: u64, rating: Option<f64>, has_videos: bool) -> Release {
    Release {
        id,
        artist: format!("Artist {}", id),
        title: format!("Record {}", id),
        country: Some("Germany".to_string()),
        year: Some(1995),
        rating,
        uri: format!("https://www.discogs.com/release/{}", id),
        has_videos,
    }
}

fn ids(releases: &[Release]) -> Vec<u64> {
    releases.iter().map(|r| r.id).collect()
}

fn collection_item(id: u64, styles: &[&str]) -> CollectionItem {
    CollectionItem {
        id,
        basic_information: BasicInformation {
            title: String::new(),
            styles: styles.iter().map(|s| s.to_string()).collect(),
            genres: vec!["Electronic".to_string()],
        },
    }
}

#[test]
fn test_rated_above_is_strict() {
    assert!(rated_above(&create_test_release(1, Some(4.01), false), 4.0));
    assert!(!rated_above(&create_test_release(2, Some(4.0), false), 4.0));
    assert!(!rated_above(&create_test_release(3, Some(3.99), false), 4.0));
}

#[test]
fn test_absent_rating_never_passes() {
    let release = create_test_release(1, None, false);
    for min_rating in [-1.0, 0.0, 2.5, 4.0, 5.0] {
        assert!(!rated_above(&release, min_rating));
    }

    let outcome = filter_releases(vec![release], -100.0, false);
    assert!(outcome.releases.is_empty());
}

#[test]
fn test_filter_releases_reports_counts_per_step() {
    let releases = vec![
        create_test_release(1, Some(4.5), true),
        create_test_release(2, Some(3.5), false),
        create_test_release(3, Some(4.2), false),
        create_test_release(4, None, false),
    ];

    let outcome = filter_releases(releases.clone(), 4.0, false);
    assert_eq!(ids(&outcome.releases), vec![1, 3]);
    assert_eq!(outcome.rated, 2);
    assert_eq!(outcome.without_videos, None);

    let outcome = filter_releases(releases, 4.0, true);
    assert_eq!(ids(&outcome.releases), vec![3]);
    assert_eq!(outcome.rated, 2);
    assert_eq!(outcome.without_videos, Some(1));
}

#[test]
fn test_sort_by_rating_is_descending_and_stable() {
    let releases = vec![
        create_test_release(1, Some(3.8), false),
        create_test_release(2, Some(4.9), false),
        create_test_release(3, Some(4.2), false),
        create_test_release(4, Some(4.2), false),
    ];

    let mut top = filter_releases(releases, 4.0, false).releases;
    sort_by_rating(&mut top);

    let ratings: Vec<f64> = top.iter().filter_map(|r| r.rating).collect();
    assert_eq!(ratings, vec![4.9, 4.2, 4.2]);
    // tied entries keep their original order
    assert_eq!(ids(&top), vec![2, 3, 4]);
}

#[test]
fn test_sort_by_rating_puts_unknown_last() {
    let mut releases = vec![
        create_test_release(1, None, false),
        create_test_release(2, Some(1.0), false),
    ];
    sort_by_rating(&mut releases);
    assert_eq!(ids(&releases), vec![2, 1]);
}

#[test]
fn test_unique_by_frequency() {
    let values = ["house", "techno", "dub", "techno", "dub", "techno"]
        .iter()
        .map(|s| s.to_string());

    assert_eq!(unique_by_frequency(values), vec!["techno", "dub", "house"]);
}

#[test]
fn test_unique_by_frequency_ties_keep_first_appearance() {
    let values = ["ambient", "acid", "acid", "ambient", "idm"]
        .iter()
        .map(|s| s.to_string());

    assert_eq!(unique_by_frequency(values), vec!["ambient", "acid", "idm"]);
}

#[test]
fn test_collection_styles_lowercases_and_merges() {
    let items = vec![
        collection_item(1, &["Techno", "Minimal"]),
        collection_item(2, &["techno", "Dub Techno"]),
        collection_item(3, &["Minimal", " "]),
        collection_item(4, &["Techno"]),
    ];

    assert_eq!(
        collection_styles(&items),
        vec!["techno", "minimal", "dub techno"]
    );
}

#[test]
fn test_parse_filter_pair() {
    assert_eq!(
        parse_filter_pair("label=Tresor").unwrap(),
        ("label".to_string(), "Tresor".to_string())
    );
    assert_eq!(
        parse_filter_pair(" q = basic channel ").unwrap(),
        ("q".to_string(), "basic channel".to_string())
    );

    let result = parse_filter_pair("label");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("expected key=value"));

    let result = parse_filter_pair("=Tresor");
    assert!(result.unwrap_err().contains("key cannot be empty"));
}

#[test]
fn test_release_table_rows() {
    let mut release = create_test_release(1, Some(4.456), false);
    release.year = None;
    release.country = None;

    let rows = release_table_rows(&[release, create_test_release(2, None, false)]);

    assert_eq!(rows[0].rating, "4.46");
    assert_eq!(rows[0].year, "");
    assert_eq!(rows[0].country, "");
    assert_eq!(rows[1].rating, "-");
    assert_eq!(rows[1].year, "1995");
}
