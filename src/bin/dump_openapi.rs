use std::io::Write;

fn main() -> anyhow::Result<()> {
    // Same document the generator writes, printed to stdout for piping into other tools.
    let doc = trading_api_demo::build_document();
    let json = doc.to_pretty_json()?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(json.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}
