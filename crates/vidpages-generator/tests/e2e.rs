//! End-to-end tests for vidpages.
//!
//! Each test builds a throwaway site directory with a data file and a
//! template, then runs the generator against it.

use std::{fs, path::PathBuf};

use tempfile::TempDir;
use vidpages_core::Config;
use vidpages_generator::{Generator, Marker, Reporter, RunSummary};

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Video Title - Video Site</title>
</head>
<body>
    <iframe src="VIDEO_EMBED_URL_HERE" allowfullscreen></iframe>
    <h1>Video Title Here</h1>
    <span class="date">2026-01-23</span>
    <p class="description">Video description goes here...</p>
</body>
</html>
"#;

struct Site {
    dir: TempDir,
    config: Config,
}

impl Site {
    fn new(data: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        fs::write(dir.path().join("videodata.json"), data).expect("write data");
        fs::write(dir.path().join("video-template.html"), TEMPLATE).expect("write template");
        let config = Config::default()
            .with_data_file(dir.path().join("videodata.json"))
            .with_template_file(dir.path().join("video-template.html"))
            .with_output_dir(dir.path().join("videos"));
        Self { dir, config }
    }

    fn write_data(&self, data: &str) {
        fs::write(self.dir.path().join("videodata.json"), data).expect("write data");
    }

    fn run(&self) -> RunSummary {
        Generator::new(self.config.clone())
            .run(&mut Reporter::silent())
            .expect("run should complete")
    }

    fn page(&self, name: &str) -> String {
        fs::read_to_string(self.output(name)).expect("page should exist")
    }

    fn output(&self, name: &str) -> PathBuf {
        self.config.output_dir.join(name)
    }

    fn output_names(&self) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(&self.config.output_dir)
            .expect("read output dir")
            .map(|e| e.expect("entry").file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}

const THREE_VIDEOS: &str = r#"[
    {
        "url": "https://videos.example.com/videos/intro.html",
        "title": "Intro",
        "embed": "https://player.example.com/embed/1",
        "date": "2025-06-01",
        "description": "Welcome to the channel"
    },
    {"url": "https://videos.example.com/videos/setup.html", "title": "Setup"},
    {"url": "https://videos.example.com/videos/deploy.html", "title": "Deploy", "date": ""}
]"#;

#[test]
fn test_one_page_per_record() {
    let site = Site::new(THREE_VIDEOS);

    let summary = site.run();

    assert_eq!(summary.created, 3);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.errors, 0);
    assert_eq!(
        site.output_names(),
        vec!["deploy.html", "intro.html", "setup.html"]
    );

    let intro = site.page("intro.html");
    assert!(intro.contains("<title>Intro - Video Site</title>"));
    assert!(intro.contains(r#"<iframe src="https://player.example.com/embed/1""#));
    assert!(intro.contains("<h1>Intro</h1>"));
    assert!(intro.contains(r#"<span class="date">2025-06-01</span>"#));
    assert!(intro.contains("Welcome to the channel"));
}

#[test]
fn test_fallback_values() {
    let site = Site::new(THREE_VIDEOS);
    site.run();

    for name in ["setup.html", "deploy.html"] {
        let page = site.page(name);
        assert!(page.contains(r#"<iframe src="" allowfullscreen>"#));
        assert!(page.contains(r#"<span class="date"></span>"#));
        assert!(page.contains("No description available"));
        for marker in Marker::ALL {
            assert!(!page.contains(marker.literal()), "{name}: {marker:?} left");
        }
    }
}

#[test]
fn test_second_run_skips_everything() {
    let site = Site::new(THREE_VIDEOS);
    site.run();
    let before = site.page("intro.html");

    let summary = site.run();

    assert_eq!(summary.created, 0);
    assert_eq!(summary.skipped, 3);
    assert_eq!(summary.errors, 0);
    assert_eq!(site.output_names().len(), 3);
    assert_eq!(site.page("intro.html"), before);
    assert!(
        summary
            .records
            .iter()
            .all(|l| l.message.ends_with("(already exists)"))
    );
}

#[test]
fn test_skip_leaves_modified_page_untouched() {
    let site = Site::new(THREE_VIDEOS);
    site.run();
    fs::write(site.output("setup.html"), "hand edited").unwrap();

    site.write_data(
        r#"[{"url": "https://videos.example.com/videos/setup.html", "title": "Setup v2"}]"#,
    );
    site.run();

    assert_eq!(site.page("setup.html"), "hand edited");
}

#[test]
fn test_overwrite_updates_existing_pages() {
    let mut site = Site::new(THREE_VIDEOS);
    site.run();

    site.write_data(
        r#"[{"url": "https://videos.example.com/videos/intro.html", "title": "Intro (remastered)"}]"#,
    );
    site.config = site.config.clone().with_overwrite(true);
    let summary = site.run();

    assert_eq!(summary.created, 1);
    assert_eq!(summary.skipped, 0);
    let intro = site.page("intro.html");
    assert!(intro.contains("<h1>Intro (remastered)</h1>"));
    assert!(intro.contains("No description available"));
}

#[test]
fn test_bad_records_do_not_abort_run() {
    let site = Site::new(
        r#"[
            {"url": "https://x/first.html", "title": "First"},
            {"url": "https://x/untitled.html"},
            {"title": "No url"},
            {"url": "https://x/", "title": "Trailing slash"},
            "not an object",
            {"url": "https://x/typed.html", "title": ["wrong"]},
            {"url": "https://x/last.html", "title": "Last"}
        ]"#,
    );

    let summary = site.run();

    assert_eq!(summary.created, 2);
    assert_eq!(summary.errors, 5);
    assert_eq!(site.output_names(), vec!["first.html", "last.html"]);

    let errors: Vec<_> = summary
        .records
        .iter()
        .filter(|l| l.message.starts_with("❌"))
        .map(|l| l.message.as_str())
        .collect();
    assert!(errors[0].contains("https://x/untitled.html"));
    assert!(errors[0].contains("title"));
    assert!(errors[1].contains("Error generating unknown"));
    assert!(errors[3].contains("Error generating unknown"));
    assert!(errors[4].contains("https://x/typed.html"));
}

#[test]
fn test_duplicate_basenames_second_is_skipped() {
    let site = Site::new(
        r#"[
            {"url": "https://a.example/v/clip.html", "title": "From A"},
            {"url": "https://b.example/v/clip.html", "title": "From B"}
        ]"#,
    );

    let summary = site.run();

    assert_eq!(summary.created, 1);
    assert_eq!(summary.skipped, 1);
    assert!(site.page("clip.html").contains("From A"));
}

#[test]
fn test_duplicate_basenames_last_wins_with_overwrite() {
    let mut site = Site::new(
        r#"[
            {"url": "https://a.example/v/clip.html", "title": "From A"},
            {"url": "https://b.example/v/clip.html", "title": "From B"}
        ]"#,
    );
    site.config = site.config.clone().with_overwrite(true);

    let summary = site.run();

    assert_eq!(summary.created, 2);
    assert!(site.page("clip.html").contains("From B"));
}

#[test]
fn test_nested_output_dir_is_created() {
    let mut site = Site::new(r#"[{"url":"https://x/v1.html","title":"Intro"}]"#);
    site.config = site
        .config
        .clone()
        .with_output_dir(site.dir.path().join("public").join("media").join("videos"));

    let summary = site.run();

    assert_eq!(summary.created, 1);
    assert!(site.page("v1.html").contains("<h1>Intro</h1>"));
}
