//! Registration glue for the supported shells.
//!
//! Every script forwards the words typed so far, including the possibly empty
//! word under the cursor, to `<helper> complete -- ...` and hands the printed
//! lines to the shell as-is. Filtering already happened in the helper.

use std::fmt;

/// Name of the helper binary the scripts call back into.
pub const HELPER: &str = env!("CARGO_PKG_NAME");

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shell::Bash => write!(f, "bash"),
            Shell::Zsh => write!(f, "zsh"),
            Shell::Fish => write!(f, "fish"),
        }
    }
}

/// Shell-safe function name for `program`.
fn function_name(program: &str) -> String {
    let ident: String = program
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("_{ident}_completion")
}

pub fn generate_script(shell: Shell, program: &str, helper: &str) -> String {
    match shell {
        Shell::Bash => BashScriptGenerator::generate_script(program, helper),
        Shell::Zsh => ZshScriptGenerator::generate_script(program, helper),
        Shell::Fish => FishScriptGenerator::generate_script(program, helper),
    }
}

pub struct BashScriptGenerator;
pub struct ZshScriptGenerator;
pub struct FishScriptGenerator;

impl BashScriptGenerator {
    pub fn generate_script(program: &str, helper: &str) -> String {
        let function = function_name(program);
        let mut script = format!("{function}() {{\n");
        script.push_str("    local IFS=$'\\n'\n");
        script.push_str("    COMPREPLY=()\n");
        script.push_str(&format!(
            "    COMPREPLY=( $({helper} complete -- \"${{COMP_WORDS[@]:1:COMP_CWORD}}\" 2>/dev/null) )\n"
        ));
        script.push_str("    return 0\n");
        script.push_str("}\n");
        script.push_str(&format!("complete -o default -F {function} {program}\n"));

        script
    }
}

impl ZshScriptGenerator {
    pub fn generate_script(program: &str, helper: &str) -> String {
        let function = function_name(program);
        let mut script = format!("#compdef {program}\n\n");
        script.push_str(&format!("{function}() {{\n"));
        script.push_str("    local -a candidates\n");
        script.push_str(&format!(
            "    candidates=(\"${{(@f)$({helper} complete -- \"${{(@)words[2,CURRENT]}}\" 2>/dev/null)}}\")\n"
        ));
        script.push_str("    compadd -Q -- ${candidates:#}\n");
        script.push_str("}\n\n");
        script.push_str(&format!("compdef {function} {program}\n"));

        script
    }
}

impl FishScriptGenerator {
    pub fn generate_script(program: &str, helper: &str) -> String {
        let function = function_name(program);
        let mut script = format!("function {function}\n");
        script.push_str("    set -l tokens (commandline -opc)\n");
        script.push_str("    set -e tokens[1]\n");
        script.push_str(&format!(
            "    {helper} complete -- $tokens (commandline -ct) 2>/dev/null\n"
        ));
        script.push_str("end\n\n");
        script.push_str(&format!("complete -c {program} -f -a '({function})'\n"));

        script
    }
}
