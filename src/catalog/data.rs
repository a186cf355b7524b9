//! Builtin vocabulary tables for the Ember language.
//!
//! These tables are the single source of truth for what the engine knows;
//! [`super::Catalog::load`] validates them at startup. Entries are listed
//! in the order completion presents them.

use super::{BuiltinFunction, Directive, Param};

pub(super) const KEYWORDS: &[&str] = &[
    "fn", "class", "struct", "enum", "if", "else", "while", "for", "in", "return", "break",
    "continue", "on", "start", "loop", "task", "every", "interrupt", "when",
];

pub(super) const STORAGE_KEYWORDS: &[&str] = &["const", "mut"];

pub(super) const PRIMITIVE_TYPES: &[&str] = &[
    "int", "uint", "long", "float", "bool", "byte", "string", "void",
];

pub(super) const CONSTANTS: &[&str] = &[
    "HIGH",
    "LOW",
    "INPUT",
    "OUTPUT",
    "INPUT_PULLUP",
    "LED_BUILTIN",
    "RISING",
    "FALLING",
    "CHANGE",
    "true",
    "false",
];

pub(super) const BUILTIN_FUNCTIONS: &[BuiltinFunction] = &[
    BuiltinFunction {
        name: "pinMode",
        params: &[Param { label: "pin: int" }, Param { label: "mode: int" }],
        return_type: "void",
        doc: "Configures the given pin to behave as an input or an output. \
              Use the INPUT, OUTPUT, or INPUT_PULLUP constants for the mode.",
    },
    BuiltinFunction {
        name: "digitalWrite",
        params: &[Param { label: "pin: int" }, Param { label: "value: int" }],
        return_type: "void",
        doc: "Writes a HIGH or LOW value to a digital pin. The pin must first \
              be configured as an output with pinMode.",
    },
    BuiltinFunction {
        name: "digitalRead",
        params: &[Param { label: "pin: int" }],
        return_type: "int",
        doc: "Reads the value of a digital pin, either HIGH or LOW.",
    },
    BuiltinFunction {
        name: "analogWrite",
        params: &[Param { label: "pin: int" }, Param { label: "value: int" }],
        return_type: "void",
        doc: "Writes a PWM duty cycle (0 to 255) to an analog-capable pin.",
    },
    BuiltinFunction {
        name: "analogRead",
        params: &[Param { label: "pin: int" }],
        return_type: "int",
        doc: "Reads the value of an analog pin as an integer from 0 to 1023.",
    },
    BuiltinFunction {
        name: "delay",
        params: &[Param { label: "ms: long" }],
        return_type: "void",
        doc: "Pauses the program for the given number of milliseconds. Timer \
              tasks and interrupts keep firing while the program is paused.",
    },
    BuiltinFunction {
        name: "delayMicros",
        params: &[Param { label: "us: long" }],
        return_type: "void",
        doc: "Pauses the program for the given number of microseconds.",
    },
    BuiltinFunction {
        name: "millis",
        params: &[],
        return_type: "long",
        doc: "Returns the number of milliseconds since the board began running \
              the current program.",
    },
    BuiltinFunction {
        name: "micros",
        params: &[],
        return_type: "long",
        doc: "Returns the number of microseconds since the board began running \
              the current program.",
    },
    BuiltinFunction {
        name: "print",
        params: &[Param { label: "value: string" }],
        return_type: "void",
        doc: "Prints a value to the serial console.",
    },
    BuiltinFunction {
        name: "println",
        params: &[Param { label: "value: string" }],
        return_type: "void",
        doc: "Prints a value to the serial console, followed by a newline.",
    },
    BuiltinFunction {
        name: "map",
        params: &[
            Param { label: "value: long" },
            Param { label: "fromLow: long" },
            Param { label: "fromHigh: long" },
            Param { label: "toLow: long" },
            Param { label: "toHigh: long" },
        ],
        return_type: "long",
        doc: "Re-maps a number from one range to another. Out-of-range values \
              are not clamped; combine with constrain when they should be.",
    },
    BuiltinFunction {
        name: "constrain",
        params: &[
            Param { label: "value: long" },
            Param { label: "min: long" },
            Param { label: "max: long" },
        ],
        return_type: "long",
        doc: "Constrains a number to lie between two bounds, inclusive.",
    },
    BuiltinFunction {
        name: "random",
        params: &[Param { label: "min: int" }, Param { label: "max: int" }],
        return_type: "int",
        doc: "Returns a pseudo-random integer from min up to, but not \
              including, max.",
    },
];

pub(super) const DIRECTIVES: &[Directive] = &[
    Directive {
        name: "@main",
        doc: "Marks this file as the program entry point. Exactly one file \
              per project carries it.",
    },
    Directive {
        name: "@board",
        doc: "Declares the target board for the build, e.g. `@board uno`.",
    },
    Directive {
        name: "@import",
        doc: "Imports the declarations of another Ember source file, e.g. \
              `@import \"motors.emb\"`.",
    },
    Directive {
        name: "@baud",
        doc: "Sets the serial console baud rate, e.g. `@baud 9600`.",
    },
];
