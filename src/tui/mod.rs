pub mod input;
pub mod progress;
pub mod selector;
pub mod style;
pub mod table;

use anyhow::Result;
use indicatif::ProgressBar;
use owo_colors::OwoColorize;

use crate::anime::{Details, Entry, Episode, Page};
use crate::video::Video;

use table::{
    build_details_table, build_entries_table, build_episodes_table, build_videos_table,
    print_title,
};

/// Terminal output of the catalog and of the resolved streams
pub struct Tui;

impl Tui {
    pub fn spinner(msg: &str) -> ProgressBar {
        progress::spinner(msg)
    }

    pub fn show_page(title: &str, page: &Page, number: u32) {
        print_title(&format!("{title} - page {number}"));

        if page.entries.is_empty() {
            Self::notice("No title found");
            return;
        }

        let rows = page
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| vec![(i + 1).to_string(), e.title.clone(), e.url.clone()])
            .collect();
        println!("{}", build_entries_table(vec!["Index", "Title", "Url"], rows));

        if page.has_next {
            Self::notice(&format!("More results with `--page {}`", number + 1));
        }
    }

    pub fn show_details(details: &Details) {
        print_title(&details.title);

        let mut rows = vec![vec!["Status".to_string(), details.status.to_string()]];
        if !details.genres.is_empty() {
            rows.push(vec!["Genres".into(), details.genres.join(", ")]);
        }
        for (key, value) in &details.attribution {
            rows.push(vec![capitalize(key), value.clone()]);
        }
        if !details.thumbnail.is_empty() {
            rows.push(vec!["Thumbnail".into(), details.thumbnail.clone()]);
        }

        println!("{}", build_details_table(rows));
        if !details.description.is_empty() {
            println!("\n{}", details.description);
        }
    }

    pub fn show_episodes(episodes: &[Episode]) {
        if episodes.is_empty() {
            Self::notice("No episode found");
            return;
        }

        let rows = episodes
            .iter()
            .enumerate()
            .map(|(i, e)| vec![(i + 1).to_string(), e.name.clone(), e.url.clone()])
            .collect();
        println!("{}", build_episodes_table(vec!["Index", "Episode", "Url"], rows));
    }

    pub fn show_videos(videos: &[Video]) {
        if videos.is_empty() {
            Self::notice("No playable stream found");
            return;
        }

        let rows = videos
            .iter()
            .enumerate()
            .map(|(i, v)| {
                vec![
                    (i + 1).to_string(),
                    v.quality.clone(),
                    v.host.to_string(),
                    v.url.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            build_videos_table(vec!["Rank", "Quality", "Host", "Url"], rows)
        );
    }

    pub fn select_entry(entries: &[Entry]) -> Result<&Entry> {
        selector::select_entry(entries)
    }

    pub fn select_episode<'a>(title: &str, episodes: &'a [Episode]) -> Result<&'a Episode> {
        selector::select_episode(title, episodes)
    }

    pub fn notice(msg: &str) {
        println!("{} {}", "::".yellow(), msg.bold());
    }

    pub fn format_err(err: &anyhow::Error) -> String {
        format!("{} {err:#}", "[ERROR]".red())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();

    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("country"), "Country");
        assert_eq!(capitalize(""), "");
    }
}
