use opscheck::cli::run;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        // Anything that propagates this far is an internal failure;
        // user errors already exited with code 1 at the command layer.
        eprintln!("Internal error: {}", e);
        let mut source = e.source();
        if source.is_some() {
            eprintln!("\nCaused by:");
            let mut indent = 1;
            while let Some(err) = source {
                eprintln!("{:indent$}  {}", "", err);
                source = err.source();
                indent += 1;
            }
        }
        std::process::exit(2);
    }
}
