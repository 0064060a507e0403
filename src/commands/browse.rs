//! Browse command - run the interactive picker

use crate::{
    ShelfrError,
    commands::builder_for,
    config::ShelfrConfig,
    output,
    tags::TagStore,
    ui::{Picker, PickerOutcome},
};

type Result<T> = std::result::Result<T, ShelfrError>;

/// Execute the browse command
///
/// With `print` set, the books listed when the picker closes are written to
/// stdout, one path per line.
///
/// # Errors
/// Returns an error if the library cannot be scanned or the terminal fails
pub fn execute<S: TagStore + ?Sized>(
    config: &ShelfrConfig,
    store: &S,
    print: bool,
    quiet: bool,
) -> Result<PickerOutcome> {
    let picker = Picker::new(builder_for(config, store), config.list_height);
    let outcome = picker.run()?;

    if print {
        if !quiet && !outcome.selected_tags.is_empty() {
            println!("Books with tags [{}]:", outcome.selected_tags.join(", "));
        }
        for path in &outcome.files {
            println!("{}", output::book(path, None, quiet));
        }
    }

    Ok(outcome)
}
