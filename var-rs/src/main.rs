use var::cli;
use var::config::{self, FaultPolicy};
use var::fault;

fn main() {
    let args = match cli::parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("var: {e}");
            eprintln!("{}", cli::USAGE);
            std::process::exit(1);
        }
    };

    if args.show_features {
        println!("{}", config::features_string());
    }

    // ── Fault policy: -l flag, then VAR_FAULT_POLICY, then fatal ─────────────
    let policy = match FaultPolicy::resolve(args.lenient) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("var: {e}");
            std::process::exit(1);
        }
    };
    fault::set_sink(policy.sink());

    if let Some(expr) = args.expr {
        println!("{}", cli::eval(&expr));
    }
}
