use anyhow::Result;
use authform::cli::{actions, actions::Action, start};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let action = start()?;

    // Handle the action
    match action {
        Action::Submit { .. } => actions::submit::handle(action).await?,
    }

    Ok(())
}
