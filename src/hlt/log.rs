use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use std::sync::{Mutex, MutexGuard};

/// Lines kept while waiting for `Log::open`; older ones are dropped first.
const MAX_BUFFERED: usize = 1000;

lazy_static! {
    static ref LOG: Mutex<Log> = Mutex::new(Log::new());
}

/// File logger. stdout belongs to the environment, so everything goes to
/// `bot-<id>.log`; lines logged before the id is known are buffered.
pub struct Log {
    buffer: Vec<String>,
    file: Option<BufWriter<File>>,
    opened: bool,
}

fn lock() -> MutexGuard<'static, Log> {
    LOG.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Log {
    fn new() -> Log {
        Log {
            buffer: Vec::new(),
            file: None,
            opened: false,
        }
    }

    /// Takes the result of creating the log file. On failure logging is
    /// switched off for the rest of the game and the buffer is released.
    fn attach(&mut self, file: io::Result<File>) {
        if self.opened {
            return;
        }
        self.opened = true;

        match file {
            Ok(file) => {
                let mut file = BufWriter::new(file);
                for line in self.buffer.drain(..) {
                    let _ = writeln!(file, "{}", line);
                }
                self.file = Some(file);
            }
            Err(_) => self.buffer = Vec::new(),
        }
    }

    fn write_line(&mut self, message: &str) {
        match self.file {
            Some(ref mut file) => {
                let _ = writeln!(file, "{}", message);
            }
            None if !self.opened => {
                if self.buffer.len() >= MAX_BUFFERED {
                    self.buffer.remove(0);
                }
                self.buffer.push(message.to_string());
            }
            None => {}
        }
    }

    fn flush_file(&mut self) {
        if let Some(ref mut file) = self.file {
            let _ = file.flush();
        }
    }

    pub fn open(player_id: usize) {
        let mut guard = lock();
        if guard.opened {
            return;
        }
        guard.attach(File::create(format!("bot-{}.log", player_id)));
    }

    pub fn log(message: &str) {
        lock().write_line(message);
    }

    pub fn flush() {
        lock().flush_file();
    }

    /// Logs and exits non-zero. Used for input the bot cannot recover from.
    pub fn panic(message: &str) -> ! {
        {
            let mut guard = lock();
            guard.write_line(message);
            if !guard.opened {
                guard.attach(File::create("bot-crash.log"));
            }
            guard.flush_file();
        }
        process::exit(1);
    }
}
