//! Function declarations advertised to the model.

use serde_json::{Map, Value, json};
use smartterm_llm::{FunctionDeclaration, Tool};

pub mod names {
    pub const LIST_DIRECTORY: &str = "list_directory";
    pub const PRINT_WORKING_DIRECTORY: &str = "print_working_directory";
    pub const CHANGE_DIRECTORY: &str = "change_directory";
    pub const MAKE_DIRECTORY: &str = "make_directory";
    pub const MOVE_PATH: &str = "move_path";
    pub const CAT_FILE: &str = "cat_file";
    pub const REMOVE_PATH: &str = "remove_path";
    pub const SHOW_CPU: &str = "show_cpu";
    pub const SHOW_MEMORY: &str = "show_memory";
    pub const LIST_PROCESSES: &str = "list_processes";
    pub const SHOW_HELP: &str = "show_help";
    pub const EXIT_TERMINAL: &str = "exit_terminal";
}

pub const CAT_MODES: &[&str] = &["read", "write", "append"];

fn insert_string_property(properties: &mut Map<String, Value>, key: &str, description: &str) {
    properties.insert(
        key.to_string(),
        json!({
            "type": "string",
            "description": description,
        }),
    );
}

fn insert_enum_property(
    properties: &mut Map<String, Value>,
    key: &str,
    description: &str,
    values: &[&str],
) {
    properties.insert(
        key.to_string(),
        json!({
            "type": "string",
            "enum": values,
            "description": description,
        }),
    );
}

fn insert_string_array_property(
    properties: &mut Map<String, Value>,
    key: &str,
    description: &str,
) {
    properties.insert(
        key.to_string(),
        json!({
            "type": "array",
            "items": { "type": "string" },
            "description": description,
        }),
    );
}

fn object_schema(properties: Map<String, Value>, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

fn declaration(name: &str, description: &str, parameters: Value) -> FunctionDeclaration {
    FunctionDeclaration {
        name: name.to_string(),
        description: description.to_string(),
        parameters,
    }
}

fn no_arguments(name: &str, description: &str) -> FunctionDeclaration {
    declaration(name, description, object_schema(Map::new(), &[]))
}

fn single_path(name: &str, description: &str, path_description: &str) -> FunctionDeclaration {
    let mut properties = Map::new();
    insert_string_property(&mut properties, "path", path_description);
    declaration(name, description, object_schema(properties, &["path"]))
}

/// Every operation the agent may invoke, in the order the help table lists
/// them.
pub fn build_function_declarations() -> Vec<FunctionDeclaration> {
    let list_directory = {
        let mut properties = Map::new();
        insert_string_property(
            &mut properties,
            "path",
            "Path to list. Defaults to the current working directory when omitted.",
        );
        declaration(
            names::LIST_DIRECTORY,
            "List files and directories. Works like the 'ls' command.",
            object_schema(properties, &[]),
        )
    };

    let move_path = {
        let mut properties = Map::new();
        insert_string_property(
            &mut properties,
            "source",
            "Path of the file or directory to move/rename.",
        );
        insert_string_property(
            &mut properties,
            "destination",
            "Target path or new name for the file/directory.",
        );
        declaration(
            names::MOVE_PATH,
            "Move or rename a file or directory (like 'mv').",
            object_schema(properties, &["source", "destination"]),
        )
    };

    let cat_file = {
        let mut properties = Map::new();
        insert_string_array_property(
            &mut properties,
            "files",
            "List of source files to read/concatenate. Optional if creating a new file.",
        );
        insert_string_property(
            &mut properties,
            "target",
            "If provided, write/append to this target file instead of just printing.",
        );
        insert_enum_property(
            &mut properties,
            "mode",
            "read = show file contents, write = overwrite target, append = append to target.",
            CAT_MODES,
        );
        insert_string_property(
            &mut properties,
            "content",
            "If writing/appending, this is the content to put into the file. Optional if interactive mode is allowed.",
        );
        declaration(
            names::CAT_FILE,
            "Read file contents, concatenate multiple files, or create/write to a file (like 'cat').",
            object_schema(properties, &["mode"]),
        )
    };

    vec![
        list_directory,
        no_arguments(
            names::PRINT_WORKING_DIRECTORY,
            "Show the absolute path of the current working directory (like 'pwd').",
        ),
        single_path(
            names::CHANGE_DIRECTORY,
            "Change the current working directory (like 'cd').",
            "Path to change into. Can be absolute or relative.",
        ),
        single_path(
            names::MAKE_DIRECTORY,
            "Create a new directory (like 'mkdir').",
            "The directory path to create.",
        ),
        move_path,
        cat_file,
        single_path(
            names::REMOVE_PATH,
            "Remove a file or directory (like 'rm').",
            "The file or directory path to remove.",
        ),
        no_arguments(names::SHOW_CPU, "Show CPU usage percentage (like 'cpu')."),
        no_arguments(names::SHOW_MEMORY, "Show memory usage details (like 'mem')."),
        no_arguments(
            names::LIST_PROCESSES,
            "List running processes (like 'processes').",
        ),
        no_arguments(
            names::SHOW_HELP,
            "Show the available commands table (like 'help').",
        ),
        no_arguments(
            names::EXIT_TERMINAL,
            "Exit SmartTerm (like 'exit' or 'quit').",
        ),
    ]
}

/// The declarations wrapped as the single tool entry a request carries.
pub fn build_tools() -> Vec<Tool> {
    vec![Tool {
        function_declarations: build_function_declarations(),
    }]
}
