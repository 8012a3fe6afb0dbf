//! Canonical standards and study documents.
//!
//! `host_associated` carries complete field definitions; `human`, `dude` and
//! `control` below it only carry what differs from their parent. The study
//! overrides `host_associated` and `human` at the flat level.

/// Nested standards tree: `host_associated` > `human` > `dude`, plus
/// `host_associated` > `control`.
pub const STANDARDS_YAML: &str = r#"host_type_specific_metadata:
  host_associated:
    default: not provided
    metadata_fields:
      country:
        allowed: [USA]
        default: USA
        empty: false
        is_phi: false
        required: true
        type: string
      description:
        allowed: [host associated]
        default: host associated
        empty: false
        is_phi: false
        required: true
        type: string
      dna_extracted:
        allowed: ["true", "false"]
        default: "true"
        empty: false
        is_phi: false
        required: true
        type: string
      elevation:
        anyof:
          - allowed: [not collected, not provided, restricted access]
            type: string
          - min: -413.0
            type: number
        empty: false
        is_phi: false
        required: true
      geo_loc_name:
        empty: false
        is_phi: false
        required: true
        type: string
      host_type:
        allowed: [human, animal, plant]
        empty: false
        is_phi: false
        required: true
        type: string
    sample_type_specific_metadata:
      fe:
        alias: stool
      stool:
        metadata_fields:
          description:
            allowed: [host associated stool]
            default: host associated stool
            type: string
          physical_specimen_location:
            allowed: [UCSD]
            default: UCSD
            empty: false
            is_phi: false
            required: true
            type: string
          physical_specimen_remaining:
            allowed: ["true", "false"]
            default: "true"
            empty: false
            is_phi: false
            required: true
            type: string
    host_type_specific_metadata:
      human:
        metadata_fields:
          description:
            allowed: [human]
            default: human
            type: string
          dna_extracted:
            allowed: ["false"]
            default: "false"
            type: string
          host_type:
            allowed: [human]
            default: human
            type: string
        sample_type_specific_metadata:
          stool:
            metadata_fields:
              description:
                allowed: [human stool]
                default: human stool
                type: string
              elevation:
                default: 14
                type: number
          dung:
            metadata_fields:
              description:
                allowed: [human dung]
                default: human dung
                type: string
        host_type_specific_metadata:
          dude:
            metadata_fields:
              host_type:
                allowed: [dude]
                default: dude
                type: string
      control:
        metadata_fields:
          description:
            allowed: [control]
            default: control
            type: string
          host_type:
            allowed: [control]
            default: control
            type: string
"#;

/// Study file with flat overrides for `host_associated` and `human`.
pub const STUDY_YAML: &str = r#"study_name: fixture study
study_specific_metadata:
  host_type_specific_metadata:
    host_associated:
      metadata_fields:
        geo_loc_name:
          allowed: ["USA:CA:San Diego"]
          default: "USA:CA:San Diego"
          type: string
        host_type:
          allowed: [human, non-human]
          type: string
      sample_type_specific_metadata:
        stool:
          metadata_fields:
            physical_specimen_location:
              allowed: [UCSDST]
              default: UCSDST
              type: string
    human:
      default: not collected
      metadata_fields:
        dna_extracted:
          allowed: ["true"]
          default: "true"
          type: string
      sample_type_specific_metadata:
        feces:
          alias: stool
        stool:
          metadata_fields:
            physical_specimen_remaining:
              allowed: ["false"]
              default: "false"
              type: string
        dung:
          base_type: stool
          metadata_fields:
            physical_specimen_location:
              allowed: [FIELD]
              default: FIELD
              type: string
        f:
          base_type: stool
"#;

/// Study file whose `human.stool` record has both `alias` and
/// `metadata_fields`.
pub const CONFLICT_STUDY_YAML: &str = r#"study_specific_metadata:
  host_type_specific_metadata:
    human:
      sample_type_specific_metadata:
        stool:
          alias: feces
          metadata_fields:
            description:
              default: oops
"#;
