/// A complete machine: BASIC, editor and kernel ROM files, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub files: [&'static str; 3],
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "2001",
        files: [
            "basic-1.901439-09-05-02-06.bin",
            "edit-1-n.901439-03.bin",
            "kernal-1.901439-04-07.bin",
        ],
    },
    Preset {
        name: "2001+ieee",
        files: [
            "basic-1.901439-09-05-02-06.bin",
            "edit-1-n.901439-03.bin",
            "kernal-1.ef00-901439-04-07+ieee-patch.bin",
        ],
    },
    Preset {
        name: "3032",
        files: [
            "basic-2.901465-01-02.bin",
            "edit-2-n.901447-24.bin",
            "kernal-2.901465-03.bin",
        ],
    },
    Preset {
        name: "3032b",
        files: [
            "basic-2.901465-01-02.bin",
            "edit-2-b.901474-01.bin",
            "kernal-2.901465-03.bin",
        ],
    },
    Preset {
        name: "4032n-nocrtc",
        files: [
            "basic-4.901465-23-20-21.bin",
            "edit-4-n.901447-29.bin",
            "kernal-4.901465-22.bin",
        ],
    },
    Preset {
        name: "4032b-nocrtc",
        files: [
            "basic-4.901465-23-20-21.bin",
            "edit-4-b.901474-02.bin",
            "kernal-4.901465-22.bin",
        ],
    },
    Preset {
        name: "4032n",
        files: [
            "basic-4.901465-23-20-21.bin",
            "edit-4-40-n-50Hz.901498-01.bin",
            "kernal-4.901465-22.bin",
        ],
    },
    Preset {
        name: "4032b",
        files: [
            "basic-4.901465-23-20-21.bin",
            "edit-4-40-b-50Hz.ts.bin",
            "kernal-4.901465-22.bin",
        ],
    },
    Preset {
        name: "8032b",
        files: [
            "basic-4.901465-23-20-21.bin",
            "edit-4-80-b-50Hz.901474-04_.bin",
            "kernal-4.901465-22.bin",
        ],
    },
];

#[must_use]
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}

/// Listing shown when an unknown preset is requested.
#[must_use]
pub fn catalog() -> String {
    let mut out = String::from("Available presets:\n\n");
    for preset in PRESETS {
        out.push_str(&format!(
            "    {}:     {}\n",
            preset.name,
            preset.files.join(", ")
        ));
    }
    out
}
