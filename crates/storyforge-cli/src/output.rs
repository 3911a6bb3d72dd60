use anyhow::Result;
use serde::Serialize;
use storyforge_core::story::Story;

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

const LIST_HEADERS: [&str; 5] = ["ID", "TITLE", "STATUS", "POINTS", "UPDATED"];

/// Render the story listing as an aligned text table.
pub fn story_table(stories: &[Story]) -> String {
    let rows: Vec<[String; 5]> = stories
        .iter()
        .map(|s| {
            [
                s.id.clone(),
                s.title.clone(),
                s.status.to_string(),
                s.story_points.map_or_else(|| "-".into(), |p| p.to_string()),
                s.updated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = LIST_HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }

    let render_line = |cells: &[&str]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(c, w)| format!("{c:<w$}"))
            .collect();
        let mut line = padded.join("  ");
        line.truncate(line.trim_end().len());
        line
    };

    let mut out = String::new();
    out.push_str(&render_line(&LIST_HEADERS));
    out.push('\n');
    let separators: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&render_line(
        &separators.iter().map(String::as_str).collect::<Vec<_>>(),
    ));
    out.push('\n');
    for row in &rows {
        out.push_str(&render_line(
            &row.iter().map(String::as_str).collect::<Vec<_>>(),
        ));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyforge_core::types::StoryStatus;

    fn story(id: &str, title: &str, points: Option<u32>) -> Story {
        let mut s = Story::new(id, title, "text");
        s.story_points = points;
        s.updated_at = "2026-08-01T09:30:00Z".parse().unwrap();
        s
    }

    #[test]
    fn table_aligns_columns_under_headers() {
        let stories = vec![
            story("us-a", "Short", Some(3)),
            story("us-long-identifier", "A much longer title", None),
        ];
        let table = story_table(&stories);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].starts_with("--"));
        // The TITLE column starts at the same offset in every row.
        let title_col = lines[0].find("TITLE").unwrap();
        assert_eq!(&lines[2][title_col..title_col + 5], "Short");
        assert_eq!(&lines[3][title_col..title_col + 6], "A much");
    }

    #[test]
    fn table_shows_dash_for_unestimated_stories() {
        let table = story_table(&[story("us-a", "A", None)]);
        let row = table.lines().nth(2).unwrap();
        assert!(row.contains("  -  "), "expected dash in POINTS column: {row}");
    }

    #[test]
    fn table_shows_status_and_timestamp() {
        let mut s = story("us-a", "A", Some(5));
        s.status = StoryStatus::Ready;
        let table = story_table(&[s]);
        let row = table.lines().nth(2).unwrap();
        assert!(row.contains("ready"));
        assert!(row.contains("2026-08-01 09:30 UTC"));
    }
}
