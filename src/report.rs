// src/report.rs
//
// Stdout reporting: overview counts and the monthly likes trend.

use std::io::{self, Write};

use crate::data::ActivityData;

pub fn print_overview(data: &ActivityData) -> io::Result<()> {
    write_overview(&mut io::stdout().lock(), data)
}

pub fn print_monthly_likes(data: &ActivityData) -> io::Result<()> {
    write_monthly_likes(&mut io::stdout().lock(), data)
}

fn write_overview(out: &mut impl Write, data: &ActivityData) -> io::Result<()> {
    writeln!(out, "Total # Likes: {}", data.count_likes())?;
    writeln!(out, "Total # Comments: {}", data.count_comments())?;
    writeln!(out, "Total # Posts: {}", data.count_posts())
}

fn write_monthly_likes(out: &mut impl Write, data: &ActivityData) -> io::Result<()> {
    let months = data.monthly_likes();
    if months.is_empty() {
        return writeln!(out, "No timestamped likes to chart.");
    }
    writeln!(out, "Monthly likes:")?;
    for m in months {
        writeln!(out, "{:04}-{:02}  {}", m.year, m.month, m.count)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ActivityRecord;
    use crate::specs::entries::parse_timestamp;

    fn like(stamp: &str) -> ActivityRecord {
        ActivityRecord {
            category: Some("Likes".into()),
            text: None,
            timestamp: Some(parse_timestamp(stamp).unwrap()),
        }
    }

    fn rendered(f: impl Fn(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn overview_lists_all_three_counts() {
        let data = ActivityData {
            likes: vec![like("Jan 5, 2020, 3:45 PM"), like("Feb 1, 2020, 9:00 AM")],
            comments: vec![],
            posts: vec![],
        };
        let out = rendered(|buf| write_overview(buf, &data));
        assert_eq!(out, "Total # Likes: 2\nTotal # Comments: 0\nTotal # Posts: 0\n");
    }

    #[test]
    fn monthly_table_is_zero_filled() {
        let data = ActivityData {
            likes: vec![like("Jan 5, 2020, 3:45 PM"), like("Mar 1, 2020, 9:00 AM")],
            comments: vec![],
            posts: vec![],
        };
        let out = rendered(|buf| write_monthly_likes(buf, &data));
        assert_eq!(out, "Monthly likes:\n2020-01  1\n2020-02  0\n2020-03  1\n");
    }

    #[test]
    fn monthly_table_handles_no_timestamps() {
        let out = rendered(|buf| write_monthly_likes(buf, &ActivityData::default()));
        assert!(out.contains("No timestamped likes"));
    }
}
