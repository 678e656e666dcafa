use cal_core::units::{k, pa};
use cal_thermo::{
    EosKind, EquationOfState, IncompressiblePerfectGas, LibraryError, PerfectGas, RhoConst,
    ThermoError, ThermoLibrary, ThermoProperties, ThermoState,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Library(#[from] LibraryError),

    #[error(transparent)]
    Thermo(#[from] ThermoError),

    #[error("Invalid component '{0}': expected NAME=KMOL")]
    InvalidComponent(String),

    #[error("Mixture components use different equations of state: {0} and {1}")]
    MixedEos(EosKind, EosKind),

    #[error("Unknown species: {0}")]
    UnknownSpecies(String),
}

#[derive(Parser)]
#[command(name = "cal-cli")]
#[command(about = "Caloric CLI - constant-Cp species properties and mixtures", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a species library (YAML, or JSON by extension)
    Validate {
        /// Path to the species library
        library: PathBuf,
    },
    /// List species in a library
    List {
        /// Path to the species library
        library: PathBuf,
    },
    /// Evaluate the properties of one species
    Props {
        /// Path to the species library
        library: PathBuf,
        /// Species name
        species: String,
        /// Pressure in Pa
        #[arg(long, default_value_t = 101_325.0)]
        p: f64,
        /// Temperature in K
        #[arg(long)]
        t: f64,
    },
    /// Mix species by molar amount and evaluate the mixture
    Mix {
        /// Path to the species library
        library: PathBuf,
        /// Component as NAME=KMOL (repeatable)
        #[arg(short, long = "component", required = true)]
        components: Vec<String>,
        /// Pressure in Pa
        #[arg(long, default_value_t = 101_325.0)]
        p: f64,
        /// Temperature in K
        #[arg(long)]
        t: f64,
    },
    /// Write the built-in species catalog as a YAML library
    Catalog {
        /// Output file (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { library } => cmd_validate(&library),
        Commands::List { library } => cmd_list(&library),
        Commands::Props {
            library,
            species,
            p,
            t,
        } => cmd_props(&library, &species, p, t),
        Commands::Mix {
            library,
            components,
            p,
            t,
        } => cmd_mix(&library, &components, p, t),
        Commands::Catalog { output } => cmd_catalog(output.as_deref()),
    }
}

fn cmd_validate(library: &Path) -> CliResult<()> {
    println!("Validating library: {}", library.display());
    let lib = ThermoLibrary::load(library)?;
    println!("✓ Library is valid ({} species)", lib.species.len());
    Ok(())
}

fn cmd_list(library: &Path) -> CliResult<()> {
    let lib = ThermoLibrary::load(library)?;
    if lib.species.is_empty() {
        println!("No species found in library");
        return Ok(());
    }
    println!("Species in library:");
    for record in &lib.species {
        let c = &record.thermodynamics;
        println!(
            "  {} - {} (W={} kg/kmol, Cp={} J/kg·K, Hf={} J/kg, Tref={} K, Href={} J/kg)",
            record.name,
            record.equation_of_state.kind(),
            record.specie.mol_weight,
            c.cp,
            c.hf,
            c.t_ref,
            c.h_ref
        );
    }
    Ok(())
}

fn cmd_props(library: &Path, species: &str, p: f64, t: f64) -> CliResult<()> {
    let lib = ThermoLibrary::load(library)?;
    let record = lib
        .get(species)
        .ok_or_else(|| CliError::UnknownSpecies(species.to_string()))?;
    match record.equation_of_state.kind() {
        EosKind::PerfectGas => show::<PerfectGas>(lib.thermo(species)?, p, t),
        EosKind::RhoConst => show::<RhoConst>(lib.thermo(species)?, p, t),
        EosKind::IncompressiblePerfectGas => {
            show::<IncompressiblePerfectGas>(lib.thermo(species)?, p, t)
        }
    }
}

fn cmd_mix(library: &Path, components: &[String], p: f64, t: f64) -> CliResult<()> {
    let lib = ThermoLibrary::load(library)?;
    let parsed = components
        .iter()
        .map(|c| parse_component(c))
        .collect::<CliResult<Vec<_>>>()?;

    let mut kind = None;
    for (name, _) in &parsed {
        let record = lib
            .get(name)
            .ok_or_else(|| CliError::UnknownSpecies(name.to_string()))?;
        let this = record.equation_of_state.kind();
        match kind {
            None => kind = Some(this),
            Some(first) if first != this => return Err(CliError::MixedEos(first, this)),
            Some(_) => {}
        }
    }

    let Some(kind) = kind else {
        return Err(LibraryError::EmptyMixture.into());
    };
    tracing::info!(components = parsed.len(), eos = %kind, "mixing species");
    match kind {
        EosKind::PerfectGas => show::<PerfectGas>(lib.mixture(&parsed)?, p, t),
        EosKind::RhoConst => show::<RhoConst>(lib.mixture(&parsed)?, p, t),
        EosKind::IncompressiblePerfectGas => {
            show::<IncompressiblePerfectGas>(lib.mixture(&parsed)?, p, t)
        }
    }
}

fn cmd_catalog(output: Option<&Path>) -> CliResult<()> {
    let lib = ThermoLibrary::builtin();
    match output {
        Some(path) => {
            lib.save_yaml(path)?;
            println!("✓ Wrote {} species to {}", lib.species.len(), path.display());
        }
        None => {
            print!("{}", lib.to_yaml_string()?);
        }
    }
    Ok(())
}

fn parse_component(arg: &str) -> CliResult<(&str, f64)> {
    let (name, moles) = arg
        .split_once('=')
        .ok_or_else(|| CliError::InvalidComponent(arg.to_string()))?;
    let moles: f64 = moles
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidComponent(arg.to_string()))?;
    Ok((name.trim(), moles))
}

fn show<E: EquationOfState>(state: ThermoState<E>, p: f64, t: f64) -> CliResult<()> {
    println!(
        "{} ({} kmol, W={:.4} kg/kmol)",
        state.name(),
        state.n_moles(),
        state.eos().w()
    );
    report(&state, p, t)
}

fn report<T: ThermoProperties>(state: &T, p: f64, t: f64) -> CliResult<()> {
    let pack = state.property_pack(pa(p), k(t))?;
    println!("  {}", pack.summary());
    println!("  es={:.1} J/kg, ea={:.1} J/kg", state.es(p, t), state.ea(p, t));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_component_pairs() {
        assert_eq!(parse_component("N2=0.79").unwrap(), ("N2", 0.79));
        assert_eq!(parse_component(" O2 = 0.21 ").unwrap(), ("O2", 0.21));
        assert!(matches!(
            parse_component("N2"),
            Err(CliError::InvalidComponent(_))
        ));
        assert!(parse_component("N2=lots").is_err());
    }

    #[test]
    fn report_rejects_non_physical_conditions() {
        let n2 = cal_thermo::Species::N2.thermo().unwrap();
        assert!(report(&n2, 101_325.0, 300.0).is_ok());
        assert!(matches!(
            report(&n2, 101_325.0, 0.0),
            Err(CliError::Thermo(ThermoError::TemperatureDomain { .. }))
        ));
    }
}
