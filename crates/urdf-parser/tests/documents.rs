//! End-to-end parsing of complete robot descriptions.

use approx::assert_relative_eq;
use urdf_model::{Geometry, JointType, MaterialId, MeshFileType, Vec3};
use urdf_parser::{
    parse_document, parse_urdf_str, Document, Element, ErrorKind, ModelReader, ParseWarning,
    ParserConfig, UrdfError,
};

const ARM: &str = r#"<?xml version="1.0"?>
<robot name="arm">
    <material name="red"><color rgba="1 0 0 1"/></material>
    <material name="gray"><color rgba="0.5 0.5 0.5 1"/></material>

    <link name="base">
        <inertial>
            <origin xyz="0 0 0.05"/>
            <mass value="4"/>
            <inertia ixx="0.1" ixy="0" ixz="0" iyy="0.1" iyz="0" izz="0.2"/>
        </inertial>
        <visual name="base_visual">
            <origin xyz="0 0 0.05" rpy="0 0 1.5707963267948966"/>
            <geometry><cylinder length="0.1" radius="0.2"/></geometry>
            <material name="gray"/>
        </visual>
        <collision>
            <geometry><cylinder length="0.1" radius="0.2"/></geometry>
        </collision>
    </link>

    <link name="upper">
        <inertial>
            <mass value="1.5"/>
            <inertia ixx="0.02" iyy="0.02" izz="0.01"/>
        </inertial>
        <visual>
            <geometry><mesh filename="meshes/upper.STL" scale="0.001 0.001 0.001"/></geometry>
            <material name="red"/>
        </visual>
        <collision group="1" mask="6">
            <geometry><box size="0.1 0.1 0.5"/></geometry>
        </collision>
    </link>

    <link name="tool"/>

    <joint name="shoulder" type="revolute">
        <origin xyz="0 0 0.1"/>
        <parent link="base"/>
        <child link="upper"/>
        <axis xyz="0 0 1"/>
        <limit lower="-3.14" upper="3.14" effort="50" velocity="1.5"/>
        <dynamics damping="0.5"/>
    </joint>

    <joint name="wrist" type="fixed">
        <parent link="upper"/>
        <child link="tool"/>
    </joint>
</robot>
"#;

#[test]
fn test_arm_links_in_document_order() {
    let out = parse_urdf_str(ARM, &ParserConfig::default()).unwrap();
    let model = &out.model;

    assert_eq!(model.name, "arm");
    let names: Vec<_> = model.links.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["base", "upper", "tool"]);
    assert_eq!(model.joints.len(), 2);
    assert_eq!(model.materials.len(), 2);

    // only the link without <inertial> is reported
    assert_eq!(out.warnings, vec![ParseWarning::DefaultInertia("tool".into())]);
}

#[test]
fn test_arm_details() {
    let out = parse_urdf_str(ARM, &ParserConfig::default().with_base_url("robots/arm.urdf")).unwrap();
    let model = &out.model;

    let base = model.link("base").unwrap();
    assert_eq!(base.inertia.mass, 4.0);
    assert_relative_eq!(base.inertia.origin.translation.z, 0.05);
    let visual = &base.visuals[0];
    assert_eq!(visual.shape.name.as_deref(), Some("base_visual"));
    assert_relative_eq!(visual.shape.origin.rpy().z, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    assert_eq!(model.visual_material(visual).unwrap().name, "gray");
    assert_eq!(visual.material, Some(MaterialId(1)));

    let upper = model.link("upper").unwrap();
    assert_eq!(upper.inertia.tensor(), [0.02, 0.0, 0.0, 0.02, 0.0, 0.01]);
    let mesh = upper.visuals[0].shape.geometry.mesh().unwrap();
    assert_eq!(mesh.file_type, MeshFileType::Stl);
    assert_eq!(mesh.base_name, "upper");
    assert_relative_eq!(mesh.scale, Vec3::new(0.001, 0.001, 0.001));
    assert_eq!(
        upper.visuals[0].shape.source_file_location.as_deref(),
        Some("robots/meshes/upper.STL")
    );
    assert_eq!(model.visual_material(&upper.visuals[0]).unwrap().color.rgb, [1.0, 0.0, 0.0]);

    let collision = &upper.collisions[0];
    assert_eq!(collision.collision_group, Some(1));
    assert_eq!(collision.collision_mask, Some(6));

    let shoulder = model.joint("shoulder").unwrap();
    assert_eq!(shoulder.joint_type, JointType::Revolute);
    assert_eq!(shoulder.axis, Vec3::z());
    assert_eq!(shoulder.limits.effort, 50.0);
    assert_eq!(shoulder.damping, 0.5);
    assert_eq!(shoulder.friction, 0.0);
    assert_eq!(model.joint("wrist").unwrap().joint_type, JointType::Fixed);
}

#[test]
fn test_force_fixed_base_zeroes_roots() {
    let config = ParserConfig::default().with_force_fixed_base(true);
    let out = parse_urdf_str(ARM, &config).unwrap();
    let model = &out.model;

    assert_eq!(model.root_link_names(), vec!["base"]);
    let base = model.link("base").unwrap();
    assert_eq!(base.inertia.mass, 0.0);
    assert_eq!(base.inertia.tensor(), [0.0; 6]);
    assert_eq!(model.link("upper").unwrap().inertia.mass, 1.5);
}

#[test]
fn test_duplicate_link_discards_model() {
    let err = parse_urdf_str(
        r#"<robot name="r">
            <link name="a"/>
            <link name="b"/>
            <link name="a"/>
        </robot>"#,
        &ParserConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, UrdfError::DuplicateLink(ref n) if n == "a"));
    assert_eq!(err.kind(), ErrorKind::Structural);
}

#[test]
fn test_duplicate_joint() {
    let err = parse_urdf_str(
        r#"<robot name="r">
            <link name="a"/><link name="b"/>
            <joint name="j" type="fixed"><parent link="a"/><child link="b"/></joint>
            <joint name="j" type="fixed"><parent link="a"/><child link="b"/></joint>
        </robot>"#,
        &ParserConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, UrdfError::DuplicateJoint(_)));
}

#[test]
fn test_robot_without_name_fails_first() {
    // the broken link would fail too, but the robot name is checked before it
    let err = parse_urdf_str(
        r#"<robot><link/><material/></robot>"#,
        &ParserConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, UrdfError::MissingName { element: "robot" }));
}

#[test]
fn test_cylinder_under_scaling() {
    let xml = r#"<robot name="r">
        <link name="a">
            <visual><geometry><cylinder length="2" radius="0.5"/></geometry></visual>
        </link>
    </robot>"#;

    let out = parse_urdf_str(xml, &ParserConfig::default()).unwrap();
    assert_eq!(
        out.model.links[0].visuals[0].shape.geometry,
        Geometry::Cylinder { radius: 0.5, length: 2.0 }
    );

    let out = parse_urdf_str(xml, &ParserConfig::default().with_scaling(2.0)).unwrap();
    assert_eq!(
        out.model.links[0].visuals[0].shape.geometry,
        Geometry::Cylinder { radius: 1.0, length: 4.0 }
    );
}

#[test]
fn test_box_and_scalar_mesh_scale() {
    let out = parse_urdf_str(
        r#"<robot name="r">
            <link name="world">
                <visual><geometry><box size="1 2 3"/></geometry></visual>
                <collision><geometry><mesh filename="a.obj" scale="2"/></geometry></collision>
            </link>
        </robot>"#,
        &ParserConfig::default(),
    )
    .unwrap();

    let link = &out.model.links[0];
    assert_eq!(link.visuals[0].shape.geometry, Geometry::Box { size: Vec3::new(1.0, 2.0, 3.0) });
    let mesh = link.collisions[0].shape.geometry.mesh().unwrap();
    assert_eq!(mesh.scale, Vec3::new(2.0, 2.0, 2.0));
    assert_eq!(out.warnings.len(), 1);
    assert!(matches!(out.warnings[0], ParseWarning::ScalarMeshScale { .. }));
}

#[test]
fn test_default_inertia_world_vs_other() {
    let out = parse_urdf_str(
        r#"<robot name="r"><link name="world"/><link name="floating"/></robot>"#,
        &ParserConfig::default(),
    )
    .unwrap();
    let world = out.model.link("world").unwrap();
    assert_eq!((world.inertia.mass, world.inertia.ixx, world.inertia.iyy, world.inertia.izz), (0.0, 0.0, 0.0, 0.0));
    let other = out.model.link("floating").unwrap();
    assert_eq!((other.inertia.mass, other.inertia.ixx, other.inertia.iyy, other.inertia.izz), (1.0, 1.0, 1.0, 1.0));
}

#[test]
fn test_duplicate_material_keeps_first() {
    let out = parse_urdf_str(
        r#"<robot name="r">
            <material name="red"><color rgba="1 0 0 1"/></material>
            <material name="red"><color rgba="0.2 0 0 1"/></material>
            <link name="world"/>
        </robot>"#,
        &ParserConfig::default(),
    )
    .unwrap();
    assert_eq!(out.model.materials.len(), 1);
    assert_eq!(out.model.material("red").unwrap().color.rgb, [1.0, 0.0, 0.0]);
    assert_eq!(out.warnings, vec![ParseWarning::DuplicateMaterial("red".into())]);
}

#[test]
fn test_unknown_variants_abort() {
    let err = parse_urdf_str(
        r#"<robot name="r">
            <link name="hand"><collision><geometry><mesh filename="hand.xyz"/></geometry></collision></link>
        </robot>"#,
        &ParserConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownVariant);
    assert!(matches!(err.root_cause(), UrdfError::UnknownMeshType(f) if f == "hand.xyz"));
    assert!(err.to_string().contains("hand"));
}

#[test]
fn test_missing_required_attribute_aborts() {
    let err = parse_urdf_str(
        r#"<robot name="r">
            <link name="ok"/>
            <link name="bad"><visual><geometry><sphere/></geometry></visual></link>
        </robot>"#,
        &ParserConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structural);
    assert!(matches!(
        err.root_cause(),
        UrdfError::MissingAttribute { attribute: "radius", .. }
    ));
}

#[test]
fn test_malformed_xml() {
    let err = parse_urdf_str("<robot name=\"r\"><link name=\"a\">", &ParserConfig::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Document);
}

#[test]
fn test_built_document() {
    let document = Document::new(
        Element::new("robot")
            .with_attribute("name", "built")
            .with_child(Element::new("link").with_attribute("name", "world")),
    );
    let out = parse_document(&document, &ParserConfig::default()).unwrap();
    assert_eq!(out.model.name, "built");
    assert_eq!(out.model.links.len(), 1);
    assert!(out.warnings.is_empty());
}

#[test]
fn test_reader_is_reusable() {
    let mut reader = ModelReader::new(ParserConfig::default());
    let first = reader.read_str(ARM).unwrap();
    let second = reader.read_str(ARM).unwrap();
    assert_eq!(first.model, second.model);
    assert_eq!(first.warnings, second.warnings);
}

#[test]
fn test_parse_file_sets_base_path() {
    let dir = std::env::temp_dir().join(format!("urdf-parser-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("arm.urdf");
    std::fs::write(&path, ARM).unwrap();

    let out = urdf_parser::parse_urdf_file(&path, &ParserConfig::default()).unwrap();
    assert_eq!(format!("{}arm.urdf", out.model.source_file), path.to_string_lossy());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_inline_redefinition_leaves_earlier_links() {
    let out = parse_urdf_str(
        r#"<robot name="r">
            <material name="red"><color rgba="1 0 0 1"/></material>
            <link name="a">
                <visual><geometry><sphere radius="1"/></geometry><material name="red"/></visual>
            </link>
            <link name="b">
                <visual>
                    <geometry><sphere radius="1"/></geometry>
                    <material name="red"><color rgba="0 1 0 1"/></material>
                </visual>
            </link>
        </robot>"#,
        &ParserConfig::default(),
    )
    .unwrap();

    let model = &out.model;
    let a = &model.link("a").unwrap().visuals[0];
    let b = &model.link("b").unwrap().visuals[0];
    assert_eq!(model.visual_material(a).unwrap().color.rgb, [1.0, 0.0, 0.0]);
    assert_eq!(model.visual_material(b).unwrap().color.rgb, [0.0, 1.0, 0.0]);
    assert_eq!(model.material("red").unwrap().color.rgb, [0.0, 1.0, 0.0]);
    assert_eq!(out.warnings, vec![ParseWarning::MaterialReplaced("red".into())]);
}

#[test]
fn test_invalid_physical_values_abort() {
    let err = parse_urdf_str(
        r#"<robot name="r">
            <link name="heavy">
                <inertial>
                    <mass value="-5"/>
                    <inertia ixx="1" iyy="1" izz="1"/>
                </inertial>
            </link>
        </robot>"#,
        &ParserConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(&err, UrdfError::Link { link, .. } if link == "heavy"));
    assert!(matches!(err.root_cause(), UrdfError::InvalidAttribute { attribute: "value", .. }));

    let err = parse_urdf_str(
        r#"<robot name="r">
            <link name="ball"><collision><geometry><sphere radius="NaN"/></geometry></collision></link>
        </robot>"#,
        &ParserConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err.root_cause(), UrdfError::InvalidAttribute { attribute: "radius", .. }));
}
