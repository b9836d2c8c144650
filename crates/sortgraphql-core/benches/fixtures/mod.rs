/// Builds a schema with `type_count` object types (declared in reverse name
/// order) that each have `field_count` fields, plus a `Query` root, an enum
/// and a union covering every object type.
pub fn synthetic_schema(type_count: usize, field_count: usize) -> String {
    let mut sdl = String::new();

    sdl.push_str("directive @tag(name: String!) repeatable on OBJECT | FIELD_DEFINITION\n\n");
    sdl.push_str("\"Every status a record can be in\"\n");
    sdl.push_str("enum Status { PENDING ARCHIVED ACTIVE DELETED }\n\n");

    for type_idx in (0..type_count).rev() {
        sdl.push_str(&format!("# Object number {type_idx}\n"));
        sdl.push_str(&format!("type Object{type_idx:04} @tag(name: \"t{type_idx}\") {{\n"));
        for field_idx in (0..field_count).rev() {
            sdl.push_str(&format!(
                "  field{field_idx:03}(limit: Int = 10, after: String): String\n",
            ));
        }
        sdl.push_str("  status: Status @deprecated\n");
        sdl.push_str("}\n\n");
    }

    let members =
        (0..type_count)
            .rev()
            .map(|type_idx| format!("Object{type_idx:04}"))
            .collect::<Vec<_>>()
            .join(" | ");
    sdl.push_str(&format!("union AnyObject = {members}\n\n"));

    sdl.push_str("type Query {\n  search(term: String!): [AnyObject!]!\n");
    for type_idx in (0..type_count).rev() {
        sdl.push_str(&format!("  object{type_idx:04}: Object{type_idx:04}\n"));
    }
    sdl.push_str("}\n");
    sdl
}

/// Splits [`synthetic_schema`] into `file_count` documents where every type
/// after the first document is extended from the next one.
pub fn synthetic_sources(file_count: usize, type_count: usize) -> Vec<(String, String)> {
    (0..file_count)
        .map(|file_idx| {
            let mut sdl = String::new();
            for type_idx in 0..type_count {
                let name = format!("File{file_idx:02}Type{type_idx:03}");
                sdl.push_str(&format!("type {name} {{\n  b: Int\n  a: String\n}}\n\n"));
            }
            if file_idx == 0 {
                sdl.push_str("type Query {\n  ping: Boolean\n}\n");
            } else {
                sdl.push_str("extend type Query {\n");
                sdl.push_str(&format!("  file{file_idx:02}: File{file_idx:02}Type000\n"));
                sdl.push_str("}\n");
            }
            (format!("file{file_idx:02}.graphqls"), sdl)
        })
        .collect()
}
