//! Platform-specific shell and interpreter names.

/// Platform family the preflight runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// Detect the running platform.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// Command used to invoke the Python interpreter.
    pub fn interpreter_command(self) -> &'static str {
        match self {
            Platform::Windows => "python",
            Platform::Unix => "python3",
        }
    }

    /// Shell executable that interprets command strings.
    pub fn shell_program(self) -> String {
        match self {
            Platform::Windows => {
                std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
            }
            Platform::Unix => "/bin/sh".to_string(),
        }
    }

    /// Flag that passes a command string to [`shell_program`](Self::shell_program).
    pub fn shell_flag(self) -> &'static str {
        match self {
            Platform::Windows => "/C",
            Platform::Unix => "-c",
        }
    }
}
