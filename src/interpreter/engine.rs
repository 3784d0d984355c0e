// Execution engine for the tape interpreter

use crate::interpreter::config::InterpreterConfig;
use crate::interpreter::errors::RuntimeError;
use crate::memory::tape::Memory;
use crate::parser::ast::{Instruction, Program};
use crate::parser::parser::Parser;
use crate::parser::registry::{OperatorTable, RegistryError};
use crate::parser::token::TokenKind;
use std::io::{Read, Write};
use tracing::debug;

/// Where the instruction pointer goes after an instruction
pub(crate) enum Flow {
    Next,
    Jump(usize),
}

/// The interpreter: owns the tape, the instruction pointer, the operator
/// table, and the input/output collaborators.
///
/// The program text is parsed on the first call to [`run`](Self::run) (or
/// [`program`](Self::program)), so operators added or removed before that
/// point shape how the text is read. Later registry changes affect nothing
/// already parsed.
pub struct Interpreter<R: Read, W: Write> {
    /// Program text not yet parsed
    source: Option<Box<dyn Read>>,

    /// Parsed instruction list
    program: Option<Program>,

    /// Symbol table owned by this interpreter
    operators: OperatorTable,

    pub(crate) input: R,
    pub(crate) output: W,
    pub(crate) memory: Memory,

    /// Index of the next instruction to execute
    ip: usize,

    /// Instructions dispatched so far
    steps: u64,

    /// First I/O failure of the current instruction
    pub(crate) error: Option<RuntimeError>,

    pub(crate) config: InterpreterConfig,
}

impl<R: Read, W: Write> Interpreter<R, W> {
    /// Create an interpreter reading `,` from `input`, writing `.` to
    /// `output`, and taking its program text from `program`.
    pub fn new(input: R, output: W, program: impl Read + 'static) -> Self {
        Self::with_config(input, output, program, InterpreterConfig::default())
    }

    pub fn with_config(
        input: R,
        output: W,
        program: impl Read + 'static,
        config: InterpreterConfig,
    ) -> Self {
        Interpreter {
            source: Some(Box::new(program)),
            program: None,
            operators: OperatorTable::builtin(),
            input,
            output,
            memory: Memory::new(config.memory_size),
            ip: 0,
            steps: 0,
            error: None,
            config,
        }
    }

    /// Create an interpreter for an already-built instruction list.
    pub fn from_program(program: Program, input: R, output: W, config: InterpreterConfig) -> Self {
        Interpreter {
            source: None,
            program: Some(program),
            operators: OperatorTable::builtin(),
            input,
            output,
            memory: Memory::new(config.memory_size),
            ip: 0,
            steps: 0,
            error: None,
            config,
        }
    }

    /// Run the program until the instruction pointer leaves the instruction
    /// list or an error stops it.
    ///
    /// A run that stopped on an error can be resumed by calling `run` again;
    /// it continues with the instruction after the one that failed. Once the
    /// program has finished, further calls return `Ok(())` immediately.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        self.parse()?;
        let program = self.program.take().unwrap_or_default();
        let result = self.execute(&program);
        self.program = Some(program);
        result
    }

    /// The parsed instruction list, parsing the program text first if needed.
    pub fn program(&mut self) -> Result<&Program, RuntimeError> {
        self.parse()?;
        self.program.as_ref().ok_or(RuntimeError::SourceConsumed)
    }

    /// Register a user-defined operator on this interpreter.
    ///
    /// See [`OperatorTable::add`] for which symbols are refused.
    pub fn add_operator<F>(&mut self, symbol: char, operator: F) -> Result<(), RegistryError>
    where
        F: Fn(usize, &mut Memory) + Send + Sync + 'static,
    {
        self.operators.add(symbol, operator)
    }

    /// Remove a symbol, built-in or user-defined, from this interpreter.
    pub fn remove_operator(&mut self, symbol: char) -> Result<(), RegistryError> {
        self.operators.remove(symbol).map(|_| ())
    }

    /// Cell value at `position`; 0 unless `0 <= position < capacity`.
    pub fn get_value(&self, position: isize) -> i64 {
        self.memory.get(position)
    }

    pub fn cursor(&self) -> isize {
        self.memory.cursor()
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Instructions dispatched so far
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn parse(&mut self) -> Result<(), RuntimeError> {
        if self.program.is_some() {
            return Ok(());
        }
        let source = self.source.take().ok_or(RuntimeError::SourceConsumed)?;
        let program = Parser::from_source(source, &self.operators)
            .with_unrecognized(self.config.unrecognized)
            .parse()?;
        self.program = Some(program);
        Ok(())
    }

    fn execute(&mut self, program: &Program) -> Result<(), RuntimeError> {
        debug!(instructions = program.len(), ip = self.ip, "run started");

        while let Some(inst) = program.get(self.ip) {
            if let Some(limit) = self.config.step_limit {
                if self.steps >= limit {
                    return Err(RuntimeError::StepLimitExceeded { limit });
                }
            }
            self.steps += 1;

            match self.dispatch(inst)? {
                Flow::Next => self.ip += 1,
                Flow::Jump(target) => self.ip = target,
            }

            if let Some(cursor) = self.memory.take_fault() {
                return Err(RuntimeError::CursorOutOfBounds {
                    cursor,
                    capacity: self.memory.capacity(),
                    location: inst.location,
                });
            }

            if let Some(err) = self.error.take() {
                debug!(error = %err, line = inst.location.line, column = inst.location.column, "run stopped on I/O error");
                return Err(err);
            }
        }

        self.output.flush()?;
        debug!(steps = self.steps, "run finished");
        Ok(())
    }

    /// Execute one instruction
    fn dispatch(&mut self, inst: &Instruction) -> Result<Flow, RuntimeError> {
        if let Some(operator) = &inst.token.operator {
            operator(inst.count, &mut self.memory);
            return Ok(Flow::Next);
        }

        match (inst.kind(), inst.jump_target()) {
            (TokenKind::Print, _) => {
                self.op_print(inst.count);
                Ok(Flow::Next)
            }
            (TokenKind::Read, _) => {
                self.op_read(inst.count);
                Ok(Flow::Next)
            }
            (TokenKind::LoopOpen, Some(target)) => Ok(self.op_jump(target, |value| value == 0)),
            (TokenKind::LoopClose, Some(target)) => Ok(self.op_jump(target, |value| value != 0)),
            (kind, _) => Err(RuntimeError::UnknownInstruction {
                kind,
                location: inst.location,
            }),
        }
    }
}
