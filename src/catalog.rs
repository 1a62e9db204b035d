//! The built-in catalog: languages curated from those commonly featured on
//! W3Schools, plus number systems and coding schemes. Some languages omit
//! sections on purpose, HTML for example has no functions.

use crate::registry::{
    CodingScheme, Example, Function, Language, NumberSystem, Registry, TagGroup, TagItem, Use,
};

/// Builds the registry every production navigator starts from.
pub fn standard() -> Registry {
    Registry::new(languages(), number_systems(), coding_schemes())
}

fn func(id: &str, name: &str, brief: &str, detail: &str) -> Function {
    Function {
        id: id.into(),
        name: name.into(),
        brief: brief.into(),
        detail: detail.into(),
    }
}

fn usage(id: &str, name: &str, brief: &str, detail: &str) -> Use {
    Use {
        id: id.into(),
        name: name.into(),
        brief: brief.into(),
        detail: detail.into(),
    }
}

fn group(id: &str, group_name: &str, items_label: &str, items: Vec<TagItem>) -> TagGroup {
    TagGroup {
        id: id.into(),
        group_name: group_name.into(),
        items_label: Some(items_label.into()),
        items,
    }
}

fn tag(id: &str, name: &str, brief: &str, detail: &str) -> TagItem {
    TagItem {
        id: id.into(),
        name: name.into(),
        brief: brief.into(),
        detail: detail.into(),
        example: None,
    }
}

fn example(title: &str, code: &str) -> Example {
    Example {
        title: title.into(),
        code: code.into(),
    }
}

fn languages() -> Vec<Language> {
    vec![
        Language {
            id: "html".into(),
            name: "HTML".into(),
            description: "HTML (HyperText Markup Language) structures content on the web. It defines elements that browsers render as text, images, links, and interactive forms.".into(),
            categories_label: Some("Tags".into()),
            functions: Vec::new(),
            uses: vec![
                usage("structure", "Document Structure", "Define the skeleton of a webpage using semantic elements.", "HTML provides semantic elements like <header>, <nav>, <main>, <article>, and <footer> to structure content clearly for users and assistive technologies."),
                usage("forms", "Forms and Inputs", "Collect data from users via forms.", "HTML forms include a rich set of controls (input, select, textarea) and attributes for validation, accessibility, and integration with backend endpoints."),
                usage("media", "Media Embedding", "Embed images, audio, and video.", "Use <img>, <audio>, and <video> for media. Attributes like controls, autoplay, and loop fine-tune playback."),
            ],
            tag_groups: vec![
                group("text", "Text & Headings", "Tag", vec![
                    tag("p", "<p>", "Paragraph element.", "The <p> element represents a paragraph of text. Browsers typically add spacing before and after paragraphs. Use for body text, descriptions, and general content."),
                    tag("h1", "<h1>", "Top-level heading.", "<h1> denotes the highest-level heading, ideal for the page title. Use one main <h1> per page for clarity and SEO. Should represent the main topic of the page."),
                    tag("h2", "<h2>", "Secondary heading.", "<h2> represents section headings within a page. Use for major content divisions and maintain proper heading hierarchy."),
                    tag("a", "<a>", "Hyperlink anchor.", "The <a> (anchor) element creates hyperlinks via the href attribute. It can link to pages, sections, files, or trigger protocols like mailto:. Use target=\"_blank\" for external links."),
                    tag("span", "<span>", "Inline text wrapper.", "Generic inline container for text. Use for styling specific words or phrases without affecting document flow."),
                    tag("div", "<div>", "Block container.", "Generic block-level container. Use for grouping content and applying styles or scripts to sections."),
                ]),
                group("forms", "Forms", "Tag", vec![
                    tag("form", "<form>", "Form container.", "Wraps interactive controls to submit data. Supports GET/POST methods and rich validation semantics. Use action and method attributes."),
                    tag("input", "<input>", "Input control.", "Single-line input with many types (text, email, number, date, password, etc.). Attributes like required, pattern, and placeholder enable validation and UX."),
                    tag("button", "<button>", "Clickable button.", "Triggers actions or submits forms. Types include submit, button, and reset. Can contain text, images, or other elements."),
                    tag("select", "<select>", "Dropdown selection.", "Creates a dropdown menu with <option> elements. Use multiple attribute for multi-select."),
                    tag("label", "<label>", "Form label.", "Associates text with form controls. Use for attribute to link to input id for accessibility."),
                ]),
                group("media", "Media", "Tag", vec![
                    tag("img", "<img>", "Image embed.", "Embeds an image via the src attribute. The alt attribute provides alternative text for accessibility. Use loading=\"lazy\" for performance."),
                    tag("video", "<video>", "Video player.", "Embeds video with native controls. Source formats vary by browser; provide multiple <source> elements for compatibility."),
                    tag("audio", "<audio>", "Audio player.", "Embeds audio content with controls. Supports multiple formats via <source> elements."),
                ]),
                group("semantic", "Semantic Structure", "Tag", vec![
                    tag("header", "<header>", "Page header.", "Represents introductory content, typically containing navigation and branding elements."),
                    tag("nav", "<nav>", "Navigation section.", "Contains navigation links. Use for main site navigation, breadcrumbs, or pagination."),
                    tag("main", "<main>", "Main content.", "Contains the primary content of the document. Should be unique per page."),
                    tag("article", "<article>", "Self-contained content.", "Represents independent, self-contained content like blog posts, news articles, or comments."),
                    tag("footer", "<footer>", "Page footer.", "Represents footer content, typically containing copyright, links, and contact information."),
                ]),
                group("lists", "Lists", "Tag", vec![
                    tag("ul", "<ul>", "Unordered list.", "Creates a bulleted list. Use for lists where order doesn't matter."),
                    tag("ol", "<ol>", "Ordered list.", "Creates a numbered list. Use for lists where order is important."),
                    tag("li", "<li>", "List item.", "Represents an item in a list. Can contain other elements including nested lists."),
                ]),
                group("tables", "Tables", "Tag", vec![
                    tag("table", "<table>", "Data table.", "Creates a table for displaying tabular data. Use for structured information."),
                    tag("tr", "<tr>", "Table row.", "Defines a row in a table. Contains <th> or <td> elements."),
                    tag("th", "<th>", "Header cell.", "Defines a header cell in a table. Use for column or row headers."),
                    tag("td", "<td>", "Data cell.", "Defines a data cell in a table. Contains the actual data."),
                ]),
            ],
            examples: vec![
                example("Basic Page", "<!doctype html>\n<html>\n  <head><title>Page</title></head>\n  <body>\n    <h1>Hello</h1>\n    <p>Welcome.</p>\n  </body>\n</html>"),
                example("Form", "<form>\n  <label>Email <input type=\"email\"></label>\n  <button>Send</button>\n</form>"),
            ],
        },
        Language {
            id: "css".into(),
            name: "CSS".into(),
            description: "CSS (Cascading Style Sheets) styles and lays out web pages, controlling colors, typography, spacing, grid, and responsive design.".into(),
            categories_label: Some("Selectors & Properties".into()),
            functions: Vec::new(),
            uses: vec![
                usage("styling", "Styling", "Colors, fonts, spacing.", "CSS defines visual presentation, including color schemes, font stacks, whitespace, and component states."),
                usage("layout", "Layout", "Flexbox, Grid, positioning.", "Modern layout uses Flexbox and Grid for responsive, adaptive interfaces across devices."),
                usage("animation", "Animation", "Transitions and keyframes.", "CSS transitions and @keyframes enable subtle or rich animations without JavaScript."),
            ],
            tag_groups: vec![
                group("selectors", "Selectors", "Selector", vec![
                    tag("class", ".class", "Class selector.", "Matches elements with a specific class attribute. Combine classes for modular styling."),
                    tag("id", "#id", "ID selector.", "Matches an element with a given id. Use sparingly for unique, page-level anchors or references."),
                    tag("attr", "[attr]", "Attribute selector.", "Matches elements based on the presence or value of an attribute, e.g., [type=\"email\"]."),
                ]),
                group("properties", "Properties", "Property", vec![
                    tag("color", "color", "Text color.", "Sets the foreground color of text. Supports named colors, hex, rgb/rgba, hsl/hsla."),
                    tag("margin", "margin", "Outer spacing.", "Controls outer spacing around an element. Can be set per side or using shorthand."),
                    tag("display", "display", "Layout behavior.", "Defines how an element generates boxes: block, inline, flex, grid, etc."),
                ]),
            ],
            examples: vec![
                example("Centered Card", ".card {\n  margin: auto;\n  max-width: 420px;\n  padding: 16px;\n  border-radius: 12px;\n}"),
            ],
        },
        Language {
            id: "javascript".into(),
            name: "JavaScript".into(),
            description: "JavaScript is the programming language of the web, enabling interactivity, dynamic content, and full-stack development with Node.js.".into(),
            categories_label: Some("Keywords".into()),
            functions: vec![
                func("parseInt", "parseInt", "Parse integer from string.", "parseInt(string, radix) converts a string to an integer in the specified base. It ignores trailing non-numeric characters."),
                func("parseFloat", "parseFloat", "Parse float from string.", "parseFloat(string) converts a string to a floating-point number. Stops at first invalid character."),
                func("setTimeout", "setTimeout", "Run code later.", "Schedules a function to run after a delay in milliseconds. Returns a timer id that can be cleared."),
                func("JSON.parse", "JSON.parse", "Parse JSON text.", "Converts a JSON string to an object. Throws on malformed input. Use try/catch for safety."),
                func("JSON.stringify", "JSON.stringify", "Convert to JSON.", "Converts a JavaScript value to a JSON string. Handles objects, arrays, primitives."),
                func("Math.random", "Math.random", "Random number.", "Returns a random number between 0 (inclusive) and 1 (exclusive)."),
                func("Math.floor", "Math.floor", "Round down.", "Returns the largest integer less than or equal to a given number."),
                func("Math.max", "Math.max", "Maximum value.", "Returns the largest of zero or more numbers."),
                func("Array.push", "Array.push", "Add to end.", "Adds one or more elements to the end of an array and returns the new length."),
                func("Array.map", "Array.map", "Transform elements.", "Creates a new array with the results of calling a function for every array element."),
                func("Array.filter", "Array.filter", "Filter elements.", "Creates a new array with all elements that pass the test implemented by the provided function."),
                func("Array.reduce", "Array.reduce", "Reduce to value.", "Executes a reducer function on each element of the array, resulting in a single output value."),
                func("String.split", "String.split", "Split string.", "Divides a string into an ordered list of substrings, puts these substrings into an array, and returns the array."),
                func("String.trim", "String.trim", "Remove whitespace.", "Removes whitespace from both ends of a string."),
                func("console.log", "console.log", "Print to console.", "Outputs a message to the web console. Accepts multiple arguments and various data types."),
                func("fetch", "fetch", "HTTP request.", "Makes an HTTP request to fetch a resource. Returns a Promise that resolves to the Response object."),
            ],
            uses: vec![
                usage("dom", "DOM Manipulation", "Update UI dynamically.", "Interact with the Document Object Model to create, update, and remove elements and respond to user events."),
                usage("network", "Networking", "Fetch APIs.", "Use fetch or other APIs to request data from servers, handle JSON, and manage async flows with promises and async/await."),
                usage("node", "Server-side (Node.js)", "Write backend services.", "Run JavaScript on the server for APIs, rendering, and tooling using Node.js and popular frameworks."),
            ],
            tag_groups: vec![
                group("keywords", "Language Keywords", "Keyword", vec![
                    tag("function", "function", "Function declaration.", "Declares a function with its own scope and optional parameters."),
                    tag("const", "const", "Constant declaration.", "Declares a block-scoped constant that cannot be reassigned. Must be initialized."),
                    tag("let", "let", "Block-scoped variable.", "Declares a block-scoped variable. Prefer over var for predictable scoping."),
                    tag("var", "var", "Function-scoped variable.", "Declares a function-scoped variable. Hoisted to function top. Avoid in modern code."),
                    tag("if", "if", "Conditional statement.", "Executes a block of code if a specified condition is true."),
                    tag("for", "for", "For loop.", "Creates a loop that consists of three optional expressions, enclosed in parentheses and separated by semicolons."),
                    tag("while", "while", "While loop.", "Creates a loop that executes a specified statement as long as the test condition evaluates to true."),
                    tag("return", "return", "Return value.", "Specifies the value to be returned by a function."),
                    tag("class", "class", "Class declaration.", "Declares a class, which is a template for creating objects with shared properties and methods."),
                    tag("async", "async", "Async function.", "Declares an async function, which returns a Promise. Use await inside to pause execution."),
                    tag("await", "await", "Wait for promise.", "Pauses execution of async function and waits for a Promise to resolve or reject."),
                    tag("import", "import", "Import module.", "Used to import bindings which are exported by another module."),
                    tag("export", "export", "Export module.", "Used to export functions, objects, or primitives from a module."),
                ]),
                group("operators", "Operators", "Operator", vec![
                    tag("assignment", "=", "Assignment.", "Assigns the value on the right to the variable on the left."),
                    tag("addition", "+", "Addition.", "Adds two numbers or concatenates strings."),
                    tag("strict-equality", "===", "Strict equality.", "Compares two values for equality without type coercion."),
                    tag("strict-inequality", "!==", "Strict inequality.", "Compares two values for inequality without type coercion."),
                    tag("logical-and", "&&", "Logical AND.", "Returns true if both operands are true, otherwise false."),
                    tag("logical-or", "||", "Logical OR.", "Returns true if at least one operand is true, otherwise false."),
                    tag("nullish-coalescing", "??", "Nullish coalescing.", "Returns the right operand when the left is null or undefined, otherwise returns the left operand."),
                    tag("optional-chaining", "?.", "Optional chaining.", "Allows reading the value of a property located deep within a chain of connected objects without having to validate each reference."),
                    tag("spread", "...", "Spread operator.", "Expands an iterable (like an array) into individual elements."),
                ]),
            ],
            examples: vec![
                example("Sum Array", "const total = [1,2,3].reduce((a,b) => a+b, 0);\nconsole.log(total);"),
                example("Async/Await", "async function fetchData() {\n  const response = await fetch(\"/api/data\");\n  const data = await response.json();\n  return data;\n}"),
                example("Class Definition", "class User {\n  constructor(name, email) {\n    this.name = name;\n    this.email = email;\n  }\n  \n  greet() {\n    return `Hello, ${this.name}!`;\n  }\n}"),
                example("Destructuring", "const person = { name: \"John\", age: 30 };\nconst { name, age } = person;\nconst [first, second, ...rest] = [1, 2, 3, 4, 5];"),
            ],
        },
        Language {
            id: "python".into(),
            name: "Python".into(),
            description: "Python is a high-level, general-purpose language known for readability, vast libraries, and rapid development.".into(),
            categories_label: Some("Keywords".into()),
            functions: vec![
                func("print", "print", "Output to console.", "print(*objects, sep=\" \", end=\"\\n\", file=sys.stdout) writes textual representations of objects to the standard output."),
                func("len", "len", "Length of container.", "len(s) returns the number of items in a container (string, list, tuple, dict, etc.)."),
                func("range", "range", "Integer sequence.", "range(stop) or range(start, stop[, step]) produces an arithmetic progression of integers."),
                func("enumerate", "enumerate", "Index and value.", "enumerate(iterable, start=0) yields pairs of (index, value) for loops and comprehensions."),
                func("zip", "zip", "Combine iterables.", "zip(*iterables) returns an iterator of tuples, where the i-th tuple contains the i-th element from each of the argument sequences."),
                func("map", "map", "Apply function.", "map(function, iterable, ...) applies function to every item of iterable and returns an iterator."),
                func("filter", "filter", "Filter sequence.", "filter(function, iterable) constructs an iterator from elements of iterable for which function returns true."),
                func("sorted", "sorted", "Sort sequence.", "sorted(iterable, key=None, reverse=False) returns a new sorted list from the items in iterable."),
                func("sum", "sum", "Sum iterable.", "sum(iterable, start=0) returns the sum of a start value (default: 0) plus an iterable of numbers."),
                func("min", "min", "Minimum value.", "min(iterable, *[, key, default]) returns the smallest item in an iterable or the smallest of two or more arguments."),
                func("max", "max", "Maximum value.", "max(iterable, *[, key, default]) returns the largest item in an iterable or the largest of two or more arguments."),
                func("abs", "abs", "Absolute value.", "abs(x) returns the absolute value of a number. The argument may be an integer or a floating point number."),
                func("round", "round", "Round number.", "round(number[, ndigits]) returns number rounded to ndigits precision after the decimal point."),
                func("bin", "bin", "Binary string.", "bin(x) converts an integer number to a binary string prefixed with \"0b\"."),
                func("oct", "oct", "Octal string.", "oct(x) converts an integer number to an octal string prefixed with \"0o\"."),
                func("hex", "hex", "Hexadecimal string.", "hex(x) converts an integer number to a hexadecimal string prefixed with \"0x\"."),
                func("int", "int", "Integer conversion.", "int(x, base=10) returns an integer object constructed from a number or string x."),
                func("str", "str", "String conversion.", "str(object) returns a string version of object. If no object is provided, returns the empty string."),
            ],
            uses: vec![
                usage("scripting", "Scripting & Automation", "Automate tasks.", "Use Python for file processing, web scraping, data pipelines, and orchestration with concise scripts."),
                usage("data", "Data Science", "Analyze and model data.", "With libraries like NumPy, pandas, and scikit-learn, Python is a leading tool for analytics and ML."),
                usage("backend", "Web Backends", "APIs and web apps.", "Frameworks like Django and Flask power robust web services and sites."),
            ],
            tag_groups: vec![
                group("keywords", "Language Keywords", "Keyword", vec![
                    tag("def", "def", "Define a function.", "Introduces a function block with parameters and an indented body."),
                    tag("for", "for", "Loop construct.", "Iterate over items in an iterable, optionally with enumerate for indices."),
                    tag("import", "import", "Module import.", "Loads a module into the current namespace to reuse its functionality."),
                ]),
            ],
            examples: vec![
                example("List Comprehension", "squares = [x*x for x in range(5)]\nprint(squares)"),
            ],
        },
        Language {
            id: "java".into(),
            name: "Java".into(),
            description: "Java is a strongly typed, object-oriented language widely used in enterprise, Android, and backend systems.".into(),
            categories_label: Some("Keywords".into()),
            functions: vec![
                func("println", "System.out.println", "Print a line.", "Writes a line of text to standard output with a trailing newline."),
                func("mathmax", "Math.max", "Maximum of two.", "Returns the greater of two values for numeric types."),
                func("arrayssort", "Arrays.sort", "Sort arrays.", "Sorts arrays in ascending order using a tuned Dual-Pivot Quicksort for primitives."),
            ],
            uses: vec![
                usage("android", "Android Apps", "Mobile development.", "Java has been a primary language for Android apps through the Android SDK and ecosystem."),
                usage("enterprise", "Enterprise Backends", "Robust services.", "Widely used for large-scale services with frameworks like Spring."),
            ],
            tag_groups: vec![
                group("keywords", "Language Keywords", "Keyword", vec![
                    tag("class", "class", "Class declaration.", "Defines a class blueprint containing fields and methods."),
                    tag("public", "public", "Access modifier.", "Specifies visibility for classes, methods, and fields."),
                ]),
            ],
            examples: vec![
                example("Hello World", "class Main {\n  public static void main(String[] args){\n    System.out.println(\"Hello\");\n  }\n}"),
            ],
        },
        Language {
            id: "c".into(),
            name: "C".into(),
            description: "C is a systems programming language known for performance, low-level memory control, and portability.".into(),
            categories_label: Some("Keywords".into()),
            functions: vec![
                func("printf", "printf", "Formatted output.", "printf(format, ...) prints formatted text. Specifiers like %d, %f, %s control rendering."),
                func("scanf", "scanf", "Formatted input.", "Reads input according to a format string into provided pointers."),
                func("malloc", "malloc", "Allocate memory.", "Allocates a block of memory on the heap. Pair with free to avoid leaks."),
                func("free", "free", "Free memory.", "Releases memory previously allocated with malloc/calloc/realloc."),
            ],
            uses: vec![
                usage("embedded", "Embedded Systems", "Firmware & drivers.", "C is dominant in microcontrollers, kernels, drivers, and performance-critical components."),
                usage("libs", "Native Libraries", "Portable libraries.", "Many cross-language libraries and runtimes are written in C for speed and portability."),
            ],
            tag_groups: vec![
                group("keywords", "Language Keywords", "Keyword", vec![
                    tag("include", "#include", "Preprocessor include.", "Directs the preprocessor to include a header file."),
                    tag("typedef", "typedef", "Type alias.", "Defines an alias for data types, aiding readability and portability."),
                ]),
            ],
            examples: vec![
                example("Hello World", "#include <stdio.h>\nint main(){\n  printf(\"Hello\\n\");\n  return 0;\n}"),
            ],
        },
        Language {
            id: "cpp".into(),
            name: "C++".into(),
            description: "C++ extends C with object-oriented and generic programming, widely used in performance-critical software.".into(),
            categories_label: Some("Keywords".into()),
            functions: vec![
                func("cout", "std::cout", "Console output.", "Outputs values to standard output using stream insertion operators."),
                func("sort", "std::sort", "Sort containers.", "Sorts elements using IntroSort. Provide custom comparators for custom order."),
                func("getline", "std::getline", "Read line.", "Extracts characters from an input stream until a delimiter is found."),
            ],
            uses: vec![
                usage("games", "Game Engines", "Real-time graphics.", "C++ powers game engines and performance-intensive graphics applications."),
                usage("finance", "Finance/Trading", "Low-latency systems.", "Used in HFT and systems requiring deterministic performance."),
            ],
            tag_groups: vec![
                group("keywords", "Language Keywords", "Keyword", vec![
                    tag("template", "template", "Generic programming.", "Enables generic functions and classes parameterized by types or values."),
                    tag("constexpr", "constexpr", "Compile-time evaluation.", "Indicates that a function or variable may be evaluated at compile time."),
                ]),
            ],
            examples: vec![
                example("Vector Sum", "#include <vector>\n#include <numeric>\nint main(){\n  std::vector<int> v{1,2,3};\n  auto s = std::accumulate(v.begin(), v.end(), 0);\n}"),
            ],
        },
        Language {
            id: "csharp".into(),
            name: "C#".into(),
            description: "C# is a modern, object-oriented language in the .NET ecosystem for desktop, web, mobile, and cloud apps.".into(),
            categories_label: Some("Keywords".into()),
            functions: vec![
                func("writeline", "Console.WriteLine", "Print a line.", "Writes a string followed by a line terminator to the standard output stream."),
                func("linq-where", "Enumerable.Where", "Filter sequences.", "Filters a sequence of values based on a predicate expression."),
            ],
            uses: vec![
                usage("desktop", "Desktop Apps", "Windows and cross-platform.", "Build desktop apps with WPF, WinForms, or cross-platform with MAUI."),
                usage("web", "Web APIs", "ASP.NET Core services.", "Create high-performance, secure APIs and web apps with ASP.NET Core."),
            ],
            tag_groups: vec![
                group("keywords", "Language Keywords", "Keyword", vec![
                    tag("using", "using", "Namespace import or resource scope.", "Imports namespaces and controls disposal scopes in using statements."),
                    tag("async", "async/await", "Asynchronous flow.", "Write asynchronous code that resembles synchronous logic with await."),
                ]),
            ],
            examples: vec![
                example("Hello", "using System;\nclass App{ static void Main(){ Console.WriteLine(\"Hello\"); } }"),
            ],
        },
        Language {
            id: "php".into(),
            name: "PHP".into(),
            description: "PHP is a popular scripting language for server-side web development, powering many dynamic sites.".into(),
            categories_label: Some("Keywords".into()),
            functions: vec![
                func("echo", "echo", "Output text.", "Outputs one or more strings. It is a language construct, not a function."),
                func("strlen", "strlen", "String length.", "Returns the length of a given string in bytes."),
                func("array_map", "array_map", "Map over arrays.", "Applies a callback to elements of given arrays, returning a new array."),
            ],
            uses: vec![
                usage("websites", "Dynamic Websites", "Render pages.", "Generate HTML, handle forms, and manage sessions to create dynamic sites."),
                usage("apis", "REST APIs", "JSON services.", "Build JSON APIs with routing, controllers, and database connectivity."),
            ],
            tag_groups: vec![
                group("keywords", "Language Keywords", "Keyword", vec![
                    tag("foreach", "foreach", "Iterate collections.", "Iterates over arrays or objects in a concise syntax."),
                    tag("function", "function", "Define function.", "Declares a function with parameters and a body."),
                ]),
            ],
            examples: vec![
                example("Echo", "<?php echo \"Hello\"; ?>"),
            ],
        },
        Language {
            id: "sql".into(),
            name: "SQL".into(),
            description: "SQL (Structured Query Language) is used to manage and query relational databases.".into(),
            categories_label: Some("Clauses & Functions".into()),
            functions: vec![
                func("count", "COUNT()", "Count rows.", "Returns the number of rows that match a specified condition."),
                func("sum", "SUM()", "Sum values.", "Returns the total sum of a numeric column for matching rows."),
                func("avg", "AVG()", "Average value.", "Returns the average value of a numeric column for matching rows."),
            ],
            uses: vec![
                usage("query", "Querying Data", "SELECT, WHERE, JOIN.", "Retrieve and combine data using SELECT with filtering, grouping, and joins."),
                usage("ddl", "Schema Definition", "CREATE, ALTER.", "Define and evolve database schema with DDL statements."),
            ],
            tag_groups: vec![
                group("clauses", "Clauses", "Clause", vec![
                    tag("select", "SELECT", "Choose columns.", "Specifies the columns to return from a query. Combine with expressions and functions."),
                    tag("where", "WHERE", "Filter rows.", "Filters rows based on a predicate. Runs after FROM and before GROUP BY."),
                    tag("join", "JOIN", "Combine tables.", "Combines rows from two tables based on related columns and join type."),
                ]),
            ],
            examples: vec![
                example("Top Customers", "SELECT name, SUM(total) total\nFROM orders\nGROUP BY name\nORDER BY total DESC\nLIMIT 10;"),
            ],
        },
        Language {
            id: "r".into(),
            name: "R".into(),
            description: "R is a language and environment for statistical computing and graphics.".into(),
            categories_label: Some("Keywords".into()),
            functions: vec![
                func("mean", "mean()", "Average value.", "Computes the arithmetic mean of a numeric vector."),
                func("lm", "lm()", "Linear models.", "Fits linear models using formula syntax and returns model objects."),
            ],
            uses: vec![
                usage("stats", "Statistics", "Classical and modern stats.", "From t-tests to GLMs, R provides comprehensive statistical tools."),
                usage("plots", "Visualization", "Quick, rich plots.", "Base graphics and ggplot2 enable exploratory and publication-quality charts."),
            ],
            tag_groups: vec![
                group("keywords", "Keywords", "Keyword", vec![
                    tag("function", "function", "Create function.", "Defines a function with formal parameters and a body."),
                    tag("if", "if", "Conditional.", "Executes code conditionally based on logical expressions."),
                ]),
            ],
            examples: vec![
                example("Summary", "x <- c(1,2,3)\nsummary(x)"),
            ],
        },
        Language {
            id: "go".into(),
            name: "Go".into(),
            description: "Go is a compiled language focused on simplicity, concurrency, and performance.".into(),
            categories_label: Some("Keywords".into()),
            functions: vec![
                func("fmt-println", "fmt.Println", "Print line.", "Prints the operands followed by a newline. Formats using default formats for operands."),
                func("make", "make", "Allocate slices, maps, chans.", "Creates and initializes slices, maps, and channels. Returns a value of the same type."),
            ],
            uses: vec![
                usage("concurrency", "Concurrent Services", "Goroutines and channels.", "Build highly concurrent services using lightweight goroutines and channel-based communication."),
                usage("cli", "CLI Tools", "Fast binaries.", "Go produces small, static binaries ideal for tooling and CLIs."),
            ],
            tag_groups: vec![
                group("keywords", "Keywords", "Keyword", vec![
                    tag("go", "go", "Start goroutine.", "Starts a new goroutine for concurrent execution of a function."),
                    tag("defer", "defer", "Defer call.", "Schedules a function call to run after the surrounding function returns."),
                ]),
            ],
            examples: vec![
                example("Hello", "package main\nimport \"fmt\"\nfunc main(){ fmt.Println(\"Hello\") }"),
            ],
        },
        Language {
            id: "kotlin".into(),
            name: "Kotlin".into(),
            description: "Kotlin is a modern language for JVM, Android, and beyond, emphasizing conciseness and safety.".into(),
            categories_label: Some("Keywords".into()),
            functions: vec![
                func("println", "println", "Print line.", "Prints a line to standard output with a trailing newline."),
                func("let", "let", "Scoped transform.", "Applies a function to an object and returns the result, often used for null-safe chains."),
            ],
            uses: vec![
                usage("android", "Android", "Primary Android language.", "First-class support for Android apps with modern features and Kotlin coroutines."),
                usage("server", "Server-side", "Ktor, Spring.", "Use Kotlin for backends with Ktor, Spring, and Kotlin DSLs."),
            ],
            tag_groups: vec![
                group("keywords", "Keywords", "Keyword", vec![
                    tag("val", "val", "Read-only variable.", "Declares an immutable reference."),
                    tag("data", "data", "Data class.", "Generates equals, hashCode, toString, and copy for simple holder classes."),
                ]),
            ],
            examples: vec![
                example("Data Class", "data class User(val id:Int, val name:String)\nprintln(User(1, \"A\"))"),
            ],
        },
        Language {
            id: "swift".into(),
            name: "Swift".into(),
            description: "Swift is a powerful language for iOS, macOS, watchOS, and server development.".into(),
            categories_label: Some("Keywords".into()),
            functions: vec![
                func("print", "print", "Print value.", "Prints textual representations of values to the console."),
                func("map", "map", "Transform sequences.", "Applies a transform to each element in a sequence and returns a new array."),
            ],
            uses: vec![
                usage("ios", "iOS Apps", "Mobile development.", "Primary language for building iOS apps with UIKit or SwiftUI."),
                usage("server", "Server-side Swift", "Backends.", "Use Swift on the server with frameworks like Vapor."),
            ],
            tag_groups: vec![
                group("keywords", "Keywords", "Keyword", vec![
                    tag("let", "let", "Constant binding.", "Declares a value that cannot be reassigned."),
                    tag("guard", "guard", "Early exits.", "Requires conditions to be true; otherwise exits the current scope early."),
                ]),
            ],
            examples: vec![
                example("Map", "let squares = [1,2,3].map { $0*$0 }\nprint(squares)"),
            ],
        },
        Language {
            id: "typescript".into(),
            name: "TypeScript".into(),
            description: "TypeScript adds optional static typing to JavaScript for better tooling and correctness.".into(),
            categories_label: Some("Keywords".into()),
            functions: vec![
                func("tsc", "tsc (compiler)", "Compile TS to JS.", "The TypeScript compiler checks types and emits JavaScript."),
                func("asserts", "asserts", "Type assertions.", "asserts in function signatures allows users to narrow types after runtime checks."),
            ],
            uses: vec![
                usage("apps", "Large Apps", "Scale with safety.", "Static types help manage large codebases with confidence."),
                usage("libs", "Libraries & SDKs", "Stable APIs.", "Types document contracts and improve developer experience."),
            ],
            tag_groups: vec![
                group("keywords", "Keywords", "Keyword", vec![
                    tag("interface", "interface", "Type contract.", "Declares a named type describing the shape of an object."),
                    tag("type", "type", "Alias type.", "Creates type aliases, unions, intersections, and mapped types."),
                ]),
            ],
            examples: vec![
                example("Interface", "interface User { id:number; name:string }\nconst u:User = { id:1, name:\"A\" };"),
            ],
        },
    ]
}

fn number_systems() -> Vec<NumberSystem> {
    vec![
        NumberSystem {
            id: "binary".into(),
            name: "Binary (Base-2)".into(),
            detail: "Binary uses digits 0 and 1. It is fundamental to digital electronics where each bit represents two states. Conversions: to decimal sum powers of 2 for each set bit; to hex group bits in 4s; to octal group bits in 3s.".into(),
        },
        NumberSystem {
            id: "octal".into(),
            name: "Octal (Base-8)".into(),
            detail: "Octal uses digits 0-7. Historically used in systems where word sizes were multiples of 3 bits. Convert to binary by mapping each oct digit to 3 bits; to decimal by positional weights.".into(),
        },
        NumberSystem {
            id: "decimal".into(),
            name: "Decimal (Base-10)".into(),
            detail: "Decimal uses digits 0-9. It is the everyday numeral system. Convert to other bases via repeated division (for integers) and repeated multiplication (for fractional parts).".into(),
        },
        NumberSystem {
            id: "hex".into(),
            name: "Hexadecimal (Base-16)".into(),
            detail: "Hex uses digits 0-9 and A-F. Often used to represent bytes compactly. Convert to binary by mapping hex digits to 4-bit groups; to decimal by positional powers of 16.".into(),
        },
    ]
}

fn coding_schemes() -> Vec<CodingScheme> {
    vec![
        CodingScheme {
            id: "ascii".into(),
            name: "ASCII".into(),
            detail: "ASCII (American Standard Code for Information Interchange) encodes 128 characters (0-127) including control codes, digits, Latin letters, and punctuation. It underpins many legacy systems and the first 128 code points of Unicode.".into(),
        },
        CodingScheme {
            id: "unicode".into(),
            name: "Unicode".into(),
            detail: "Unicode is a universal character set covering over a million code points across scripts and symbols. Encodings like UTF-8, UTF-16, and UTF-32 store code points efficiently; UTF-8 dominates the web due to ASCII compatibility and compactness for Latin scripts.".into(),
        },
    ]
}
