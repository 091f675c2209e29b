use quick_xml::escape::escape;

/// Inputs for a freestyle project definition.
#[derive(Debug, Clone)]
pub struct JobDocument<'a> {
    pub description: &'a str,
    pub source_url: &'a str,
    pub branch_spec: &'a str,
    pub build_script: &'a str,
    pub deploy_script: &'a str,
}

impl JobDocument<'_> {
    /// Render the `config.xml` body accepted by `POST /createItem`.
    ///
    /// The project checks out `source_url`, is triggered by GitHub pushes, and
    /// runs the build script followed by the deploy script as shell steps.
    pub fn render(&self) -> String {
        let description = escape(self.description);
        let source_url = escape(self.source_url);
        let branch_spec = escape(self.branch_spec);
        let build_script = escape(self.build_script);
        let deploy_script = escape(self.deploy_script);

        format!(
            r#"<?xml version='1.1' encoding='UTF-8'?>
<project>
  <actions/>
  <description>{description}</description>
  <keepDependencies>false</keepDependencies>
  <properties>
    <com.coravy.hudson.plugins.github.GithubProjectProperty plugin="github">
      <projectUrl>{source_url}</projectUrl>
      <displayName></displayName>
    </com.coravy.hudson.plugins.github.GithubProjectProperty>
  </properties>
  <scm class="hudson.plugins.git.GitSCM" plugin="git">
    <configVersion>2</configVersion>
    <userRemoteConfigs>
      <hudson.plugins.git.UserRemoteConfig>
        <url>{source_url}</url>
      </hudson.plugins.git.UserRemoteConfig>
    </userRemoteConfigs>
    <branches>
      <hudson.plugins.git.BranchSpec>
        <name>{branch_spec}</name>
      </hudson.plugins.git.BranchSpec>
    </branches>
    <doGenerateSubmoduleConfigurations>false</doGenerateSubmoduleConfigurations>
    <submoduleCfg class="empty-list"/>
    <extensions/>
  </scm>
  <canRoam>true</canRoam>
  <disabled>false</disabled>
  <blockBuildWhenDownstreamBuilding>false</blockBuildWhenDownstreamBuilding>
  <blockBuildWhenUpstreamBuilding>false</blockBuildWhenUpstreamBuilding>
  <triggers>
    <com.cloudbees.jenkins.GitHubPushTrigger plugin="github">
      <spec></spec>
    </com.cloudbees.jenkins.GitHubPushTrigger>
  </triggers>
  <concurrentBuild>false</concurrentBuild>
  <builders>
    <hudson.tasks.Shell>
      <command>{build_script}</command>
    </hudson.tasks.Shell>
    <hudson.tasks.Shell>
      <command>{deploy_script}</command>
    </hudson.tasks.Shell>
  </builders>
  <publishers/>
  <buildWrappers/>
</project>
"#
        )
    }
}
