//! 外部タガーを呼び出すパイプライン
//!
//! 標準入力でテキストを受け取り、標準出力にCoNLL-Uを書き出す任意のプログラムを
//! 解析器として使用します。例えばUDPipeでは次のように指定します。
//!
//! ```text
//! udpipe --tokenize --tag ukrainian-iu-ud-2.12.udpipe
//! ```

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

use crate::errors::{MorphError, Result};
use crate::pipeline::conllu::parse_conllu;
use crate::pipeline::{Document, Pipeline};

/// 外部タガーを呼び出すパイプライン
///
/// 呼び出しごとにプロセスを1つ起動します。
#[derive(Debug, Clone)]
pub struct CommandPipeline {
    program: OsString,
    args: Vec<OsString>,
}

impl CommandPipeline {
    /// 新しいパイプラインを作成します。
    ///
    /// # 引数
    ///
    /// * `program` - 実行するプログラム
    /// * `args` - プログラムに渡す引数
    pub fn new<P, I, A>(program: P, args: I) -> Self
    where
        P: Into<OsString>,
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl Pipeline for CommandPipeline {
    fn process(&mut self, text: &str) -> Result<Document> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                MorphError::Analyzer(format!(
                    "failed to start {}: {}",
                    self.program.to_string_lossy(),
                    e
                ))
            })?;

        // stdin is written concurrently with reading stdout.
        let writer = child.stdin.take().map(|mut stdin| {
            let input = format!("{}\n", text);
            thread::spawn(move || stdin.write_all(input.as_bytes()))
        });

        // The child is always reaped, even when writing to it failed.
        let output = child.wait_with_output()?;
        let written = match writer {
            Some(handle) => handle.join().unwrap_or_else(|_| {
                Err(io::Error::other("stdin writer panicked"))
            }),
            None => Ok(()),
        };

        if !output.status.success() {
            return Err(MorphError::Analyzer(format!(
                "{} exited with {}: {}",
                self.program.to_string_lossy(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        match written {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                log::debug!(
                    "[ukmorph] {} closed stdin early",
                    self.program.to_string_lossy()
                );
            }
            other => other?,
        }

        let stdout = String::from_utf8(output.stdout)?;
        parse_conllu(stdout.as_bytes())
    }
}
