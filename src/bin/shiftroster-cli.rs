#![forbid(unsafe_code)]
use anyhow::Result;
use shiftroster::{
    classifier::classify,
    io,
    parser::{analyze_employee, list_employees, ParseOptions, RosterError},
    query::respond,
    report::{emoji, label, not_found_message, ConsoleSummary, SummaryRenderer},
    source::{FileSource, RosterSource},
};
use clap::{Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de consultation du tableau de service
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Tableau de service (.xlsx, .xls, .ods ou .csv)
    #[arg(long, global = true, env = "SCHEDULE_FILE_PATH", default_value = "schedule.xlsx")]
    file: String,

    /// Feuille à lire (par défaut la première)
    #[arg(long, global = true)]
    sheet: Option<String>,

    /// Première ligne de données employé (1-based)
    #[arg(long, global = true, default_value_t = 3)]
    start_row: usize,

    /// Colonne des noms (1-based)
    #[arg(long, global = true, default_value_t = 2)]
    name_col: usize,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lister les employés (numérotés)
    List,

    /// Statistiques d'un employé, par nom ou par numéro de la liste
    Show {
        who: String,
        /// Afficher le détail jour par jour
        #[arg(long)]
        details: bool,
        /// Export CSV du détail (date,code,category)
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Statistiques de tous les employés
    Summary,

    /// Classer des codes d'équipe
    Classify {
        #[arg(required = true)]
        codes: Vec<String>,
    },

    /// Simuler un message reçu par le bot
    Ask { text: String },

    /// Exporter le tableau parsé en JSON
    Export {
        #[arg(long)]
        out_json: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let opts = ParseOptions::new(cli.start_row, cli.name_col)?;
    let source = FileSource::new(&cli.file, cli.sheet.clone(), opts);

    let code = match cli.cmd {
        Commands::Classify { codes } => {
            for c in &codes {
                let category = classify(c.as_str());
                println!("{c:<8} → {} {}", emoji(category), label(category));
            }
            0
        }
        Commands::Ask { text } => {
            println!("{}", respond(&text, &source));
            0
        }
        Commands::List => {
            let snapshot = source.load()?;
            let names = list_employees(&snapshot);
            println!("{} employee(s)", names.len());
            for (i, name) in names.iter().enumerate() {
                println!("{:3}. {}", i + 1, name);
            }
            0
        }
        Commands::Show {
            who,
            details,
            out_csv,
        } => {
            let snapshot = source.load()?;
            let names = list_employees(&snapshot);
            // un numéro désigne la position dans `list`
            let name = match who.parse::<usize>() {
                Ok(n) if (1..=names.len()).contains(&n) => names[n - 1].clone(),
                _ => who,
            };
            match analyze_employee(&name, &snapshot) {
                Ok(analysis) => {
                    print!("{}", ConsoleSummary { with_details: details }.render(&analysis));
                    if let Some(path) = out_csv {
                        io::export_analysis_csv(path, &analysis)?;
                    }
                    0
                }
                Err(RosterError::EmployeeNotFound(name)) => {
                    eprintln!("{}", not_found_message(&name));
                    1
                }
                Err(err) => return Err(err.into()),
            }
        }
        Commands::Summary => {
            let snapshot = source.load()?;
            let names = list_employees(&snapshot);
            println!("{}", "=".repeat(80));
            println!("班表总览");
            println!("{}", "=".repeat(80));
            println!("总员工数: {}", names.len());
            println!();
            let renderer = ConsoleSummary::default();
            for name in &names {
                let analysis = analyze_employee(name, &snapshot)?;
                println!("{}", renderer.render(&analysis));
            }
            0
        }
        Commands::Export { out_json } => {
            let snapshot = source.load()?;
            io::export_snapshot_json(&out_json, &snapshot)?;
            println!("{} employee(s) exported to {}", snapshot.len(), out_json);
            0
        }
    };

    std::process::exit(code);
}
