use crate::models::Category;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Clone)]
#[command(name = "kmz-processor")]
#[command(about = "Convert ACS member, repeater, Winlink and assembly point CSV exports to KML/KMZ")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, help = "Members CSV export")]
    pub members: Option<PathBuf>,

    #[arg(short, long, help = "Repeaters CSV export")]
    pub repeaters: Option<PathBuf>,

    #[arg(short, long, help = "Winlink nodes CSV export")]
    pub winlink: Option<PathBuf>,

    #[arg(short, long, help = "Assembly points CSV export")]
    pub assembly_points: Option<PathBuf>,

    #[arg(short, long, help = "Document title")]
    pub doc_name: String,

    #[arg(short = 'i', long, help = "Document identifier")]
    pub doc_id: String,

    #[arg(short, long, help = "Output file path (.kml or .kmz)")]
    pub output: PathBuf,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, help = "Hide the progress spinner")]
    pub quiet: bool,
}

impl Cli {
    /// Requested sources in processing order.
    pub fn sources(&self) -> Vec<(Category, &Path)> {
        Category::ALL
            .iter()
            .filter_map(|&category| {
                let path = match category {
                    Category::Members => self.members.as_deref(),
                    Category::Repeaters => self.repeaters.as_deref(),
                    Category::Winlink => self.winlink.as_deref(),
                    Category::AssemblyPoints => self.assembly_points.as_deref(),
                };
                path.map(|p| (category, p))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::try_parse_from([
            "kmz-processor",
            "-a",
            "points.csv",
            "-m",
            "members.csv",
            "-d",
            "ACS",
            "-i",
            "acs-1",
            "-o",
            "map.kmz",
        ])
        .unwrap();

        assert_eq!(cli.doc_name, "ACS");
        assert_eq!(cli.doc_id, "acs-1");
        assert_eq!(cli.output, PathBuf::from("map.kmz"));

        let sources = cli.sources();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0], (Category::Members, Path::new("members.csv")));
        assert_eq!(
            sources[1],
            (Category::AssemblyPoints, Path::new("points.csv"))
        );
    }

    #[test]
    fn test_parse_long_flags() {
        let cli = Cli::try_parse_from([
            "kmz-processor",
            "--repeaters",
            "r.csv",
            "--winlink",
            "w.csv",
            "--assembly-points",
            "a.csv",
            "--doc-name",
            "ACS",
            "--doc-id",
            "acs-1",
            "--output",
            "map.kml",
        ])
        .unwrap();

        let categories: Vec<_> = cli.sources().into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            categories,
            vec![
                Category::Repeaters,
                Category::Winlink,
                Category::AssemblyPoints
            ]
        );
    }

    #[test]
    fn test_required_arguments() {
        assert!(Cli::try_parse_from(["kmz-processor", "-m", "m.csv", "-o", "map.kml"]).is_err());
    }

    #[test]
    fn test_no_sources_parses() {
        let cli = Cli::try_parse_from(["kmz-processor", "-d", "ACS", "-i", "x", "-o", "map.kml"])
            .unwrap();
        assert!(cli.sources().is_empty());
    }
}
