//! GPU instancing for the large ensembles.
//!
//! Particles and ornaments are one draw call each: the main world rewrites a
//! `Vec` of per-instance transforms every frame, the render world re-uploads
//! it wholesale and draws the shared mesh once per member. No dirty tracking
//! is attempted; the buffer is recreated every frame.

use bevy::{
    core_pipeline::core_3d::Transparent3d,
    ecs::system::{SystemParamItem, lifetimeless::*},
    pbr::{MeshPipeline, MeshPipelineKey, RenderMeshInstances, SetMeshBindGroup, SetMeshViewBindGroup},
    prelude::*,
    render::{
        Render, RenderApp, RenderSet,
        extract_component::{ExtractComponent, ExtractComponentPlugin},
        mesh::{
            MeshVertexBufferLayoutRef, RenderMesh, RenderMeshBufferInfo, allocator::MeshAllocator,
        },
        render_asset::RenderAssets,
        render_phase::{
            AddRenderCommand, DrawFunctions, PhaseItem, PhaseItemExtraIndex, RenderCommand,
            RenderCommandResult, SetItemPipeline, TrackedRenderPass, ViewSortedRenderPhases,
        },
        render_resource::*,
        renderer::RenderDevice,
        sync_world::MainEntity,
        view::ExtractedView,
    },
};
use bytemuck::{Pod, Zeroable};

const INSTANCED_ENSEMBLE_SHADER_PATH: &str = "shaders/instanced_ensemble.wgsl";

pub struct InstancedEnsemblePlugin;

impl Plugin for InstancedEnsemblePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(ExtractComponentPlugin::<EnsembleInstanceData>::default());

        let Some(render_app) = app.get_sub_app_mut(RenderApp) else {
            return;
        };

        render_app
            .add_render_command::<Transparent3d, DrawEnsembleInstances>()
            .init_resource::<SpecializedMeshPipelines<InstancedEnsemblePipeline>>()
            .add_systems(
                Render,
                (
                    queue_instanced_ensembles.in_set(RenderSet::QueueMeshes),
                    prepare_instance_buffers.in_set(RenderSet::PrepareResources),
                ),
            );
    }

    fn finish(&self, app: &mut App) {
        let Some(render_app) = app.get_sub_app_mut(RenderApp) else {
            return;
        };
        render_app.init_resource::<InstancedEnsemblePipeline>();
    }
}

/// One ensemble member's transform and tint, laid out for the instance
/// vertex buffer.
#[derive(Clone, Copy, Pod, Zeroable)]
#[repr(C)]
pub struct EnsembleInstance {
    pub position: [f32; 3],
    pub scale: f32,
    pub rotation: [f32; 4], // Quaternion
    pub color: [f32; 4],    // Linear RGBA
}

impl EnsembleInstance {
    pub fn new(position: Vec3, scale: f32, rotation: Quat, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            scale,
            rotation: rotation.to_array(),
            color,
        }
    }
}

/// The per-ensemble instance buffer, rewritten in place each frame by the
/// ensemble updater and extracted to the render world as-is.
#[derive(Component, Deref, Clone, ExtractComponent)]
pub struct EnsembleInstanceData(pub Vec<EnsembleInstance>);

#[derive(Component)]
pub struct EnsembleInstanceBuffer {
    pub buffer: Buffer,
    pub length: usize,
}

fn prepare_instance_buffers(
    mut commands: Commands,
    query: Query<(Entity, &EnsembleInstanceData)>,
    render_device: Res<RenderDevice>,
) {
    for (entity, instance_data) in &query {
        let buffer = render_device.create_buffer_with_data(&BufferInitDescriptor {
            label: Some("ensemble_instance_buffer"),
            contents: bytemuck::cast_slice(instance_data.as_slice()),
            usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        });
        commands.entity(entity).insert(EnsembleInstanceBuffer {
            buffer,
            length: instance_data.len(),
        });
    }
}

#[derive(Resource)]
struct InstancedEnsemblePipeline {
    shader: Handle<Shader>,
    mesh_pipeline: MeshPipeline,
}

impl FromWorld for InstancedEnsemblePipeline {
    fn from_world(world: &mut World) -> Self {
        let mesh_pipeline = world.resource::<MeshPipeline>();

        Self {
            shader: world.load_asset(INSTANCED_ENSEMBLE_SHADER_PATH),
            mesh_pipeline: mesh_pipeline.clone(),
        }
    }
}

impl SpecializedMeshPipeline for InstancedEnsemblePipeline {
    type Key = MeshPipelineKey;

    fn specialize(
        &self,
        key: Self::Key,
        layout: &MeshVertexBufferLayoutRef,
    ) -> Result<RenderPipelineDescriptor, SpecializedMeshPipelineError> {
        let mut descriptor = self.mesh_pipeline.specialize(key, layout)?;
        descriptor.vertex.shader = self.shader.clone();
        descriptor.vertex.buffers.push(VertexBufferLayout {
            array_stride: std::mem::size_of::<EnsembleInstance>() as u64,
            step_mode: VertexStepMode::Instance,
            attributes: vec![
                // Position + uniform scale
                VertexAttribute {
                    format: VertexFormat::Float32x4,
                    offset: 0,
                    shader_location: 3,
                },
                // Rotation quaternion
                VertexAttribute {
                    format: VertexFormat::Float32x4,
                    offset: 16,
                    shader_location: 4,
                },
                // Linear RGBA tint
                VertexAttribute {
                    format: VertexFormat::Float32x4,
                    offset: 32,
                    shader_location: 5,
                },
            ],
        });
        descriptor.fragment.as_mut().unwrap().shader = self.shader.clone();

        Ok(descriptor)
    }
}

fn queue_instanced_ensembles(
    transparent_3d_draw_functions: Res<DrawFunctions<Transparent3d>>,
    ensemble_pipeline: Res<InstancedEnsemblePipeline>,
    mut pipelines: ResMut<SpecializedMeshPipelines<InstancedEnsemblePipeline>>,
    pipeline_cache: Res<PipelineCache>,
    meshes: Res<RenderAssets<RenderMesh>>,
    render_mesh_instances: Res<RenderMeshInstances>,
    ensembles: Query<(Entity, &MainEntity), With<EnsembleInstanceData>>,
    mut transparent_render_phases: ResMut<ViewSortedRenderPhases<Transparent3d>>,
    views: Query<(&ExtractedView, &Msaa)>,
) {
    let draw_ensembles = transparent_3d_draw_functions.read().id::<DrawEnsembleInstances>();

    for (view, msaa) in &views {
        let Some(transparent_phase) = transparent_render_phases.get_mut(&view.retained_view_entity)
        else {
            continue;
        };

        let msaa_key = MeshPipelineKey::from_msaa_samples(msaa.samples());
        let view_key = msaa_key | MeshPipelineKey::from_hdr(view.hdr);
        let rangefinder = view.rangefinder3d();

        for (entity, main_entity) in &ensembles {
            let Some(mesh_instance) = render_mesh_instances.render_mesh_queue_data(*main_entity)
            else {
                continue;
            };
            let Some(mesh) = meshes.get(mesh_instance.mesh_asset_id) else {
                continue;
            };

            let key =
                view_key | MeshPipelineKey::from_primitive_topology(mesh.primitive_topology());
            let Ok(pipeline) =
                pipelines.specialize(&pipeline_cache, &ensemble_pipeline, key, &mesh.layout)
            else {
                continue;
            };

            transparent_phase.add(Transparent3d {
                entity: (entity, *main_entity),
                pipeline,
                draw_function: draw_ensembles,
                distance: rangefinder.distance_translation(&mesh_instance.translation),
                batch_range: 0..1,
                extra_index: PhaseItemExtraIndex::None,
                indexed: true,
            });
        }
    }
}

type DrawEnsembleInstances = (
    SetItemPipeline,
    SetMeshViewBindGroup<0>,
    SetMeshBindGroup<1>,
    DrawMeshInstanced,
);

struct DrawMeshInstanced;

impl<P: PhaseItem> RenderCommand<P> for DrawMeshInstanced {
    type Param = (
        SRes<RenderAssets<RenderMesh>>,
        SRes<RenderMeshInstances>,
        SRes<MeshAllocator>,
    );
    type ViewQuery = ();
    type ItemQuery = Read<EnsembleInstanceBuffer>;

    #[inline]
    fn render<'w>(
        item: &P,
        _view: (),
        instance_buffer: Option<&'w EnsembleInstanceBuffer>,
        (meshes, render_mesh_instances, mesh_allocator): SystemParamItem<'w, '_, Self::Param>,
        pass: &mut TrackedRenderPass<'w>,
    ) -> RenderCommandResult {
        let mesh_allocator = mesh_allocator.into_inner();

        let Some(mesh_instance) = render_mesh_instances.render_mesh_queue_data(item.main_entity())
        else {
            return RenderCommandResult::Skip;
        };
        let Some(gpu_mesh) = meshes.into_inner().get(mesh_instance.mesh_asset_id) else {
            return RenderCommandResult::Skip;
        };
        let Some(instance_buffer) = instance_buffer else {
            return RenderCommandResult::Skip;
        };
        let Some(vertex_buffer_slice) =
            mesh_allocator.mesh_vertex_slice(&mesh_instance.mesh_asset_id)
        else {
            return RenderCommandResult::Skip;
        };

        pass.set_vertex_buffer(0, vertex_buffer_slice.buffer.slice(..));
        pass.set_vertex_buffer(1, instance_buffer.buffer.slice(..));

        match &gpu_mesh.buffer_info {
            RenderMeshBufferInfo::Indexed {
                index_format,
                count,
            } => {
                let Some(index_buffer_slice) =
                    mesh_allocator.mesh_index_slice(&mesh_instance.mesh_asset_id)
                else {
                    return RenderCommandResult::Skip;
                };

                pass.set_index_buffer(index_buffer_slice.buffer.slice(..), 0, *index_format);
                pass.draw_indexed(
                    index_buffer_slice.range.start..(index_buffer_slice.range.start + count),
                    vertex_buffer_slice.range.start as i32,
                    0..instance_buffer.length as u32,
                );
            }
            RenderMeshBufferInfo::NonIndexed => {
                pass.draw(vertex_buffer_slice.range, 0..instance_buffer.length as u32);
            }
        }
        RenderCommandResult::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_layout_matches_the_vertex_attributes() {
        // Three Float32x4 attributes, tightly packed.
        assert_eq!(std::mem::size_of::<EnsembleInstance>(), 48);
        assert_eq!(std::mem::offset_of!(EnsembleInstance, rotation), 16);
        assert_eq!(std::mem::offset_of!(EnsembleInstance, color), 32);
    }

    #[test]
    fn instance_round_trips_transform_fields() {
        let instance = EnsembleInstance::new(
            Vec3::new(1.0, 2.0, 3.0),
            0.5,
            Quat::IDENTITY,
            [1.0, 0.8, 0.0, 1.0],
        );
        assert_eq!(instance.position, [1.0, 2.0, 3.0]);
        assert_eq!(instance.scale, 0.5);
        assert_eq!(instance.rotation, [0.0, 0.0, 0.0, 1.0]);
    }
}
