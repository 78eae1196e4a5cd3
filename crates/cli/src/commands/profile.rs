//! Profile management commands.
//!
//! Every command follows the same shape: load the document, transform it in
//! memory, save once, then print. Errors bubble up as typed `StoreError`s
//! for the exit-code mapping in `crate::error`.

use anyhow::Result;
use clap::Subcommand;
use flowctl_config::{
    ActiveProfileContext, PROFILE_ENV_VAR, ProfileStore, StoreError, compute_overrides,
    default_settings, settings_from_env, with_defaults,
};
use tracing::debug;

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Show settings in one or many profiles. Defaults to the active profile.
    Get {
        /// Profile names to show
        names: Vec<String>,
    },

    /// List profile names.
    Ls,

    /// Change the value for one or more settings in the active profile.
    Set {
        /// Settings to change, in VAR=VAL format
        #[arg(required = true)]
        variables: Vec<String>,
    },

    /// Restore default values by removing settings from the active profile.
    Unset {
        /// Setting names to remove
        #[arg(required = true)]
        variables: Vec<String>,
    },

    /// Create a new profile.
    Create {
        /// Name of the new profile
        name: String,

        /// Copy an existing profile
        #[arg(long = "from", value_name = "NAME")]
        from_name: Option<String>,
    },

    /// Remove the given profile.
    Rm {
        /// Profile name to remove
        name: String,
    },

    /// Change the name of a profile.
    Rename {
        /// Current profile name
        name: String,

        /// New profile name
        new_name: String,
    },

    /// Display settings from a given profile; defaults to the active profile.
    Inspect {
        /// Profile name to inspect
        name: Option<String>,

        /// Also list every default setting
        #[arg(long)]
        show_defaults: bool,

        /// Annotate each value with its source
        #[arg(long)]
        show_sources: bool,
    },
}

pub fn run(command: ProfileCommand, profile_flag: Option<&str>, store: &ProfileStore) -> Result<()> {
    debug!(
        profiles_path = %store.path().display(),
        profile_flag = profile_flag.unwrap_or("<none>"),
        "Running profile command"
    );

    match command {
        ProfileCommand::Get { names } => run_get(store, profile_flag, names),
        ProfileCommand::Ls => run_ls(store, profile_flag),
        ProfileCommand::Set { variables } => run_set(store, profile_flag, &variables),
        ProfileCommand::Unset { variables } => run_unset(store, profile_flag, &variables),
        ProfileCommand::Create { name, from_name } => {
            run_create(store, &name, from_name.as_deref())
        }
        ProfileCommand::Rm { name } => run_rm(store, &name),
        ProfileCommand::Rename { name, new_name } => run_rename(store, &name, &new_name),
        ProfileCommand::Inspect {
            name,
            show_defaults,
            show_sources,
        } => run_inspect(store, profile_flag, name, show_defaults, show_sources),
    }
}

fn run_get(store: &ProfileStore, profile_flag: Option<&str>, names: Vec<String>) -> Result<()> {
    let doc = store.load()?;

    let names = if names.is_empty() {
        let context = ActiveProfileContext::select(&doc, profile_flag);
        vec![context.name]
    } else {
        names
    };

    let display_profiles = doc.get_many(&names)?;
    println!("{}", toml::to_string(&display_profiles)?.trim_end());
    Ok(())
}

fn run_ls(store: &ProfileStore, profile_flag: Option<&str>) -> Result<()> {
    let doc = store.load()?;
    let current = ActiveProfileContext::select(&doc, profile_flag).name;

    for name in doc.profile_names() {
        if name == current {
            println!("* {}", name);
        } else {
            println!("{}", name);
        }
    }
    Ok(())
}

fn run_set(store: &ProfileStore, profile_flag: Option<&str>, variables: &[String]) -> Result<()> {
    let mut doc = store.load()?;
    let profile_name = ActiveProfileContext::select(&doc, profile_flag).name;

    let pairs = doc.set_values(&profile_name, variables)?;
    store.save(&doc)?;

    for (var, value) in &pairs {
        println!("Set variable '{}' to '{}'", var, value);
    }
    for (var, _) in &pairs {
        if std::env::var(var).is_ok() {
            println!(
                "'{}' is also set by an environment variable which will override your \
                 config value. Run `flowctl profile unset {}` to clear it.",
                var, var
            );
        }
    }
    println!("Updated profile '{}'", profile_name);
    Ok(())
}

fn run_unset(store: &ProfileStore, profile_flag: Option<&str>, variables: &[String]) -> Result<()> {
    let mut doc = store.load()?;
    let profile_name = ActiveProfileContext::select(&doc, profile_flag).name;

    doc.unset_values(&profile_name, variables)?;
    store.save(&doc)?;

    for var in variables {
        println!("Unset variable '{}'", var);
    }
    println!("Updated profile '{}'", profile_name);
    Ok(())
}

fn run_create(store: &ProfileStore, name: &str, from_name: Option<&str>) -> Result<()> {
    let mut doc = store.load()?;
    doc.create(name, from_name)?;
    store.save(&doc)?;

    let from_blurb = match from_name {
        Some(from) => format!(" matching '{}'", from),
        None => String::new(),
    };
    println!(
        "Created profile '{name}'{from_blurb} at {loc}.\n\
         To use your profile, set an environment variable:\n\
         \n    export {PROFILE_ENV_VAR}='{name}'\n\n\
         or include the profile in your CLI commands:\n\
         \n    flowctl -p '{name}' profile inspect",
        loc = store.path().display(),
    );
    Ok(())
}

fn run_rm(store: &ProfileStore, name: &str) -> Result<()> {
    let mut doc = store.load()?;
    let outcome = doc.remove(name)?;
    store.save(&doc)?;

    println!("{} profile '{}'.", outcome.verb(), name);
    Ok(())
}

fn run_rename(store: &ProfileStore, name: &str, new_name: &str) -> Result<()> {
    let mut doc = store.load()?;
    doc.rename(name, new_name)?;
    store.save(&doc)?;

    println!("Renamed profile '{}' to '{}'.", name, new_name);
    Ok(())
}

fn run_inspect(
    store: &ProfileStore,
    profile_flag: Option<&str>,
    name: Option<String>,
    show_defaults: bool,
    show_sources: bool,
) -> Result<()> {
    let doc = store.load()?;

    // a named profile shows its stored settings; the active profile shows
    // its fully resolved settings
    let (name, current_settings) = match name {
        Some(name) => {
            let settings = doc
                .settings(&name)
                .cloned()
                .ok_or_else(|| StoreError::ProfileNotFound { name: name.clone() })?;
            (name, settings)
        }
        None => {
            let context = ActiveProfileContext::select(&doc, profile_flag);
            (context.name, context.settings)
        }
    };

    let defaults = default_settings();
    let env = settings_from_env();

    let mut output = vec![format!("{}='{}'", PROFILE_ENV_VAR, name)];

    for entry in compute_overrides(&current_settings, &env, &defaults) {
        let source_blurb = if show_sources {
            format!(" (from {})", entry.source)
        } else {
            String::new()
        };
        output.push(format!("{}='{}'{}", entry.key, entry.value, source_blurb));
    }

    if show_defaults {
        for entry in with_defaults(&defaults) {
            let source_blurb = if show_sources {
                format!(" (from {})", entry.source)
            } else {
                String::new()
            };
            output.push(format!("{}='{}'{}", entry.key, entry.value, source_blurb));
        }
    }

    println!("{}", output.join("\n"));
    Ok(())
}
