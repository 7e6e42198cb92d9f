//! Built-in requests sent by the benchmark and the reproduction binary.

use crate::core::domain::{ExecutionRequest, SourceFile, Testcase};

const JAVA_VERSION: &str = "25.0.1";

const HELLO_SOURCE: &str = r#"public class Main { public static void main(String[] args) { System.out.println("Hello from Java Benchmark"); } }"#;

const GREETING_SOURCE: &str = r#"
import java.util.Scanner;

public class Main {
    public static void main(String[] args) {
        Scanner scanner = new Scanner(System.in);
        if (scanner.hasNextLine()) {
            String line = scanner.nextLine();
            System.out.println("Hello " + line);
        } else {
            System.out.println("Hello World");
        }
    }
}
"#;

/// Single-file Java program that prints one line. Used for every benchmark request.
pub fn java_hello() -> ExecutionRequest {
    ExecutionRequest {
        language: "java".to_string(),
        version: JAVA_VERSION.to_string(),
        files: vec![SourceFile::utf8("Main.java", HELLO_SOURCE)],
        args: vec![],
        testcases: None,
    }
}

/// Java program greeting its stdin, checked against two testcases.
pub fn java_greeting_batch() -> ExecutionRequest {
    ExecutionRequest {
        language: "java".to_string(),
        version: JAVA_VERSION.to_string(),
        files: vec![SourceFile::utf8("Main.java", GREETING_SOURCE)],
        args: vec![],
        testcases: Some(vec![
            Testcase::new("1", "Alice", "Hello Alice"),
            Testcase::new("2", "Bob", "Hello Bob"),
        ]),
    }
}
