use anyhow::Result;
use clap::{Args, ValueEnum};
use std::io::{self, Write};

use crate::content::Catalog;

/// Print catalog entries
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only print this section
    #[arg(short, long, value_enum)]
    pub section: Option<ListSection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListSection {
    Projects,
    Publications,
    Timeline,
}

impl ListSection {
    const ALL: [ListSection; 3] = [
        ListSection::Projects,
        ListSection::Publications,
        ListSection::Timeline,
    ];

    fn title(self) -> &'static str {
        match self {
            ListSection::Projects => "Projects",
            ListSection::Publications => "Publications",
            ListSection::Timeline => "Timeline",
        }
    }
}

impl ListCommand {
    pub fn execute(&self, catalog: &Catalog) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(catalog, &mut out)?;
        out.flush()?;
        Ok(())
    }

    pub fn write_to<W: Write>(&self, catalog: &Catalog, out: &mut W) -> io::Result<()> {
        let sections: Vec<ListSection> = match self.section {
            Some(section) => vec![section],
            None => ListSection::ALL.to_vec(),
        };

        for (i, section) in sections.into_iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}", section.title())?;
            match section {
                ListSection::Projects => {
                    for card in &catalog.projects {
                        let record = &card.record;
                        write!(out, "  [{}] {} | {}", card.tab.label(), record.date, record.title)?;
                        if let Some(category) = record.category() {
                            write!(out, " ({})", category)?;
                        }
                        writeln!(out)?;
                    }
                }
                ListSection::Publications => {
                    for publication in &catalog.publications {
                        writeln!(
                            out,
                            "  {} | {} | {} | {}",
                            publication.year,
                            publication.title,
                            publication.journal,
                            publication.doi_url()
                        )?;
                    }
                }
                ListSection::Timeline => {
                    for year in &catalog.timeline {
                        for entry in &year.entries {
                            writeln!(out, "  {}  {:<18} {}", year.year, entry.category, entry.title)?;
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(section: Option<ListSection>) -> String {
        let catalog = Catalog::builtin().unwrap();
        let mut out = Vec::new();
        ListCommand { section }.write_to(&catalog, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_publications() {
        let text = render(Some(ListSection::Publications));
        assert!(text.starts_with("Publications\n"));
        assert!(text.contains("https://doi.org/10.25077/jbioua.11.2.108-116.2023"));
        assert!(!text.contains("Projects"));
    }

    #[test]
    fn test_list_all_sections() {
        let text = render(None);
        assert!(text.contains("Projects\n"));
        assert!(text.contains("[Featured]"));
        assert!(text.contains("Timeline\n"));
        assert!(text.contains("2019  Education"));
    }
}
